//! Item-count checks for multi-value fields

/// At least `min` selected items
pub fn validate_min_items<T>(items: &[T], min: usize) -> Result<(), String> {
    (items.len() >= min)
        .then_some(())
        .ok_or_else(|| format!("Select at least {} items", min))
}

/// At most `max` selected items
pub fn validate_max_items<T>(items: &[T], max: usize) -> Result<(), String> {
    (items.len() <= max)
        .then_some(())
        .ok_or_else(|| format!("Select at most {} items", max))
}
