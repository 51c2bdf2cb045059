/// Gap between the bottom of the fixed header and the line used to pick the
/// active section.
const VIEW_LINE_OFFSET: f64 = 96.0;

/// A labeled page section reachable from the navigation bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Top,
    Games,
    Find,
}

impl Section {
    /// All sections in document order
    pub const ALL: [Section; 3] = [Section::Top, Section::Games, Section::Find];

    pub fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Games => "games",
            Self::Find => "find",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Home",
            Self::Games => "Games",
            Self::Find => "Find Me",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Vertical extent of a rendered section, relative to the viewport top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, bottom: f64) -> Self {
        Self {
            section,
            top,
            bottom,
        }
    }

    pub fn spans(&self, line: ViewLine) -> bool {
        self.top <= line.0 && self.bottom >= line.0
    }
}

/// Horizontal line, in px from the viewport top, that marks a section active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLine(pub f64);

impl ViewLine {
    pub fn below_header(header_height: f64) -> Self {
        Self(header_height + VIEW_LINE_OFFSET)
    }

    pub fn px(self) -> f64 {
        self.0
    }
}

/// Section under the view line. When sections overlap the later one wins;
/// when none spans the line, the first section is active.
pub fn active_section(bounds: &[SectionBounds], line: ViewLine) -> Section {
    bounds
        .iter()
        .rev()
        .find(|b| b.spans(line))
        .map(|b| b.section)
        .unwrap_or_default()
}

/// Active navigation entry. Scrolls re-derive it from layout; clicks set it
/// directly until the next scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    active: Section,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn on_scroll(&mut self, bounds: &[SectionBounds], line: ViewLine) -> Section {
        self.active = active_section(bounds, line);
        self.active
    }

    pub fn on_click(&mut self, section: Section) {
        self.active = section;
    }
}
