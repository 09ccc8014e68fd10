/// Commands a key press can map to, resolved through the configured key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    PrevMonth,
    NextMonth,
    Today,
    RefreshInsight,
    Exit,
}
