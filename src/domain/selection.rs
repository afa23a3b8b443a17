/// Selects `key`, or clears the selection if `key` is already selected.
///
/// At most one key is ever selected.
pub fn toggle<T: PartialEq>(slot: &mut Option<T>, key: T) {
    if slot.as_ref() == Some(&key) {
        *slot = None;
    } else {
        *slot = Some(key);
    }
}
