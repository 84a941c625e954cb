use shared::Color;

pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-4xl rounded-xl shadow-lg";
pub const CARD_SECTION: &str = "bg-gray-800 border border-gray-700 p-4 rounded-lg shadow-sm";

pub const PANEL: &str = "relative grid gap-4 md:grid-cols-2 lg:grid-cols-3 transition-opacity duration-200";
pub const PANEL_DISABLED: &str = "disabled opacity-40 pointer-events-none select-none";
pub const OVERLAY: &str = "absolute inset-0 z-10 flex flex-col items-center justify-center gap-2 rounded-lg bg-gray-900/80 text-center pointer-events-auto";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_DANGER: &str = "bg-red-600 hover:bg-red-700 focus:ring-2 focus:ring-red-400 focus:outline-none";
pub const BUTTON_ICON: &str = "text-2xl rounded-full p-2 hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-400";
pub const VOTE_BUTTON: &str = "h-14 rounded-lg text-3xl shadow-md transform transition-transform duration-150 hover:scale-105 focus:outline-none focus:ring-2";

pub const BAR_TRACK: &str = "flex-1 h-3 mr-3 rounded-full bg-gray-700 overflow-hidden";
pub const BAR_STACK: &str = "flex w-full h-5 rounded-full bg-gray-700 overflow-hidden";

pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const TEXT_PERCENT: &str = "w-12 text-right text-sm font-mono text-gray-300";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center";
pub const GRID_COLS_3: &str = "grid grid-cols-3 gap-3 mb-4";
pub const SPACE_Y_BASE: &str = "space-y-2";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_danger() -> String {
    combine_classes(BUTTON_BASE, BUTTON_DANGER)
}

pub fn vote_button(color: Color) -> String {
    match color {
        Color::Red => combine_classes(VOTE_BUTTON, "bg-red-600 hover:bg-red-500 focus:ring-red-300"),
        Color::Yellow => combine_classes(VOTE_BUTTON, "bg-yellow-500 hover:bg-yellow-400 focus:ring-yellow-200"),
        Color::Green => combine_classes(VOTE_BUTTON, "bg-green-600 hover:bg-green-500 focus:ring-green-300"),
    }
}

pub fn bar_fill(color: Color) -> &'static str {
    match color {
        Color::Red => "h-full bg-red-500 transition-all duration-300",
        Color::Yellow => "h-full bg-yellow-400 transition-all duration-300",
        Color::Green => "h-full bg-green-500 transition-all duration-300",
    }
}

pub fn face(color: Color) -> &'static str {
    match color {
        Color::Red => "☹️",
        Color::Yellow => "😐",
        Color::Green => "😊",
    }
}
