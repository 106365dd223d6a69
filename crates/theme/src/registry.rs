use inkwork_paint::{Color, Paint, PaintStyle, Rect};

use crate::context::ThemeContext;

/// Anything that can resolve itself to a concrete color for a context.
///
/// This is the capability the generic paint-resolution path consumes: given
/// the current theme context and the region being painted, produce a paint.
pub trait ColorProvider {
    fn get_color(&self, context: &ThemeContext) -> Color;

    /// Builds a paint for the region. Solid providers ignore the rectangle;
    /// it is part of the signature so region-dependent providers (gradients)
    /// can implement the same capability.
    fn paint(&self, context: &ThemeContext, rect: Rect, style: PaintStyle) -> Paint {
        let _ = rect;
        Paint::new(self.get_color(context), style)
    }
}

impl ColorProvider for Color {
    fn get_color(&self, context: &ThemeContext) -> Color {
        let _ = context;
        *self
    }
}

/// A light-mode/dark-mode color pair resolved at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColor {
    pub light: Color,
    pub dark: Color,
}

impl ThemeColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }
}

impl ColorProvider for ThemeColor {
    fn get_color(&self, context: &ThemeContext) -> Color {
        if context.is_dark() {
            self.dark
        } else {
            self.light
        }
    }
}

/// Semantic color roles used by the widget paint pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    OnBackground,
    Content,
    OnContent,
    Banding,
    OnBanding,
    Divider,
    Header,
    OnHeader,
    TabFocused,
    OnTabFocused,
    TabCurrent,
    OnTabCurrent,
    DropArea,
    Editable,
    OnEditable,
    Selection,
    OnSelection,
    InactiveSelection,
    OnInactiveSelection,
    Scroll,
    ScrollRollover,
    ScrollEdge,
    Accent,
    Control,
    OnControl,
    ControlPressed,
    OnControlPressed,
    ControlEdge,
    IconButton,
    IconButtonRollover,
    IconButtonPressed,
    Tooltip,
    OnTooltip,
    SearchList,
    OnSearchList,
    Error,
    OnError,
    Warning,
    OnWarning,
}

impl ColorRole {
    pub const COUNT: usize = 40;

    pub const ALL: [ColorRole; ColorRole::COUNT] = [
        ColorRole::Background,
        ColorRole::OnBackground,
        ColorRole::Content,
        ColorRole::OnContent,
        ColorRole::Banding,
        ColorRole::OnBanding,
        ColorRole::Divider,
        ColorRole::Header,
        ColorRole::OnHeader,
        ColorRole::TabFocused,
        ColorRole::OnTabFocused,
        ColorRole::TabCurrent,
        ColorRole::OnTabCurrent,
        ColorRole::DropArea,
        ColorRole::Editable,
        ColorRole::OnEditable,
        ColorRole::Selection,
        ColorRole::OnSelection,
        ColorRole::InactiveSelection,
        ColorRole::OnInactiveSelection,
        ColorRole::Scroll,
        ColorRole::ScrollRollover,
        ColorRole::ScrollEdge,
        ColorRole::Accent,
        ColorRole::Control,
        ColorRole::OnControl,
        ColorRole::ControlPressed,
        ColorRole::OnControlPressed,
        ColorRole::ControlEdge,
        ColorRole::IconButton,
        ColorRole::IconButtonRollover,
        ColorRole::IconButtonPressed,
        ColorRole::Tooltip,
        ColorRole::OnTooltip,
        ColorRole::SearchList,
        ColorRole::OnSearchList,
        ColorRole::Error,
        ColorRole::OnError,
        ColorRole::Warning,
        ColorRole::OnWarning,
    ];

    /// Stable snake_case identifier, used by override files.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::OnBackground => "on_background",
            ColorRole::Content => "content",
            ColorRole::OnContent => "on_content",
            ColorRole::Banding => "banding",
            ColorRole::OnBanding => "on_banding",
            ColorRole::Divider => "divider",
            ColorRole::Header => "header",
            ColorRole::OnHeader => "on_header",
            ColorRole::TabFocused => "tab_focused",
            ColorRole::OnTabFocused => "on_tab_focused",
            ColorRole::TabCurrent => "tab_current",
            ColorRole::OnTabCurrent => "on_tab_current",
            ColorRole::DropArea => "drop_area",
            ColorRole::Editable => "editable",
            ColorRole::OnEditable => "on_editable",
            ColorRole::Selection => "selection",
            ColorRole::OnSelection => "on_selection",
            ColorRole::InactiveSelection => "inactive_selection",
            ColorRole::OnInactiveSelection => "on_inactive_selection",
            ColorRole::Scroll => "scroll",
            ColorRole::ScrollRollover => "scroll_rollover",
            ColorRole::ScrollEdge => "scroll_edge",
            ColorRole::Accent => "accent",
            ColorRole::Control => "control",
            ColorRole::OnControl => "on_control",
            ColorRole::ControlPressed => "control_pressed",
            ColorRole::OnControlPressed => "on_control_pressed",
            ColorRole::ControlEdge => "control_edge",
            ColorRole::IconButton => "icon_button",
            ColorRole::IconButtonRollover => "icon_button_rollover",
            ColorRole::IconButtonPressed => "icon_button_pressed",
            ColorRole::Tooltip => "tooltip",
            ColorRole::OnTooltip => "on_tooltip",
            ColorRole::SearchList => "search_list",
            ColorRole::OnSearchList => "on_search_list",
            ColorRole::Error => "error",
            ColorRole::OnError => "on_error",
            ColorRole::Warning => "warning",
            ColorRole::OnWarning => "on_warning",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorRole> {
        ColorRole::ALL.iter().copied().find(|role| role.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

// Builtin light/dark pairs, one entry per role in `ColorRole::ALL` order.
const BUILTIN: [ThemeColor; ColorRole::COUNT] = [
    ThemeColor::new(Color::rgb(238, 238, 238), Color::rgb(50, 50, 50)), // background
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(221, 221, 221)),    // on_background
    ThemeColor::new(Color::rgb(255, 255, 255), Color::rgb(32, 32, 32)), // content
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(221, 221, 221)),    // on_content
    ThemeColor::new(Color::rgb(235, 235, 220), Color::rgb(42, 42, 42)), // banding
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(221, 221, 221)),    // on_banding
    ThemeColor::new(Color::rgb(192, 192, 192), Color::rgb(102, 102, 102)), // divider
    ThemeColor::new(Color::rgb(43, 43, 43), Color::rgb(64, 64, 64)),    // header
    ThemeColor::new(Color::rgb(255, 255, 255), Color::rgb(192, 192, 192)), // on_header
    ThemeColor::new(Color::rgb(224, 212, 175), Color::rgb(68, 102, 0)), // tab_focused
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(221, 221, 221)),    // on_tab_focused
    ThemeColor::new(Color::rgb(211, 207, 197), Color::rgb(41, 61, 0)),  // tab_current
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(221, 221, 221)),    // on_tab_current
    ThemeColor::new(Color::rgb(204, 0, 51), Color::rgb(255, 0, 0)),     // drop_area
    ThemeColor::new(Color::rgb(255, 255, 255), Color::rgb(24, 24, 24)), // editable
    ThemeColor::new(Color::rgb(0, 0, 160), Color::rgb(100, 153, 153)),  // on_editable
    ThemeColor::new(Color::rgb(0, 96, 160), Color::rgb(0, 96, 160)),    // selection
    ThemeColor::new(Color::rgb(255, 255, 255), Color::rgb(255, 255, 255)), // on_selection
    ThemeColor::new(Color::rgb(0, 64, 148), Color::rgb(0, 64, 148)),    // inactive_selection
    ThemeColor::new(Color::rgb(228, 228, 228), Color::rgb(228, 228, 228)), // on_inactive_selection
    ThemeColor::new(
        Color::rgba(192, 192, 192, 128),
        Color::rgba(128, 128, 128, 128),
    ), // scroll
    ThemeColor::new(Color::rgb(192, 192, 192), Color::rgb(128, 128, 128)), // scroll_rollover
    ThemeColor::new(Color::rgb(128, 128, 128), Color::rgb(160, 160, 160)), // scroll_edge
    ThemeColor::new(Color::rgb(0, 102, 102), Color::rgb(100, 153, 153)),   // accent
    ThemeColor::new(Color::rgb(248, 248, 255), Color::rgb(64, 64, 64)),    // control
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(221, 221, 221)),       // on_control
    ThemeColor::new(Color::rgb(0, 96, 160), Color::rgb(0, 96, 160)),       // control_pressed
    ThemeColor::new(Color::rgb(255, 255, 255), Color::rgb(255, 255, 255)), // on_control_pressed
    ThemeColor::new(Color::rgb(96, 96, 96), Color::rgb(96, 96, 96)),       // control_edge
    ThemeColor::new(Color::rgb(96, 96, 96), Color::rgb(128, 128, 128)),    // icon_button
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(192, 192, 192)),       // icon_button_rollover
    ThemeColor::new(Color::rgb(0, 96, 160), Color::rgb(0, 96, 160)),       // icon_button_pressed
    ThemeColor::new(Color::rgb(252, 252, 196), Color::rgb(184, 204, 143)), // tooltip
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(32, 32, 32)),          // on_tooltip
    ThemeColor::new(Color::rgb(224, 255, 255), Color::rgb(0, 43, 43)),     // search_list
    ThemeColor::new(Color::rgb(0, 0, 0), Color::rgb(204, 204, 204)),       // on_search_list
    ThemeColor::new(Color::rgb(192, 64, 64), Color::rgb(115, 37, 37)),     // error
    ThemeColor::new(Color::rgb(255, 255, 255), Color::rgb(221, 221, 221)), // on_error
    ThemeColor::new(Color::rgb(224, 128, 0), Color::rgb(192, 96, 0)),      // warning
    ThemeColor::new(Color::rgb(255, 255, 255), Color::rgb(221, 221, 221)), // on_warning
];

/// Immutable role-to-color table, built once at startup and passed by
/// reference wherever colors are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    colors: [ThemeColor; ColorRole::COUNT],
}

impl ThemeRegistry {
    /// The stock table; every role is populated.
    pub fn builtin() -> Self {
        Self { colors: BUILTIN }
    }

    pub fn get(&self, role: ColorRole) -> ThemeColor {
        self.colors[role.index()]
    }

    /// Returns a registry with one role replaced, for startup composition.
    pub fn with_color(mut self, role: ColorRole, color: ThemeColor) -> Self {
        self.colors[role.index()] = color;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, ThemeColor)> + '_ {
        ColorRole::ALL
            .iter()
            .map(move |role| (*role, self.colors[role.index()]))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
