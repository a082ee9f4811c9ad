/// Whole-percent completion rate, rounded half up. Zero when `total` is zero.
pub fn completion_rate(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = u64::from(completed);
    let total = u64::from(total);
    ((completed * 200 + total) / (2 * total)) as u32
}
