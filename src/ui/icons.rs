pub struct Icons;

impl Icons {
    pub const BOOK: &str = "📖";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const LINK: &str = "🔗";
    pub const TAG: &str = "🏷️";
    pub const QUOTE: &str = "💬";
    pub const EMPTY: &str = "∅";
}
