//! Check for the three-sheet indicator layout (config / data / optional colors).

/// Accepted names for the configuration sheet.
pub const CONFIG_SHEET_NAMES: [&str; 2] = ["Configurações", "Configuracoes"];
/// Name of the data sheet.
pub const DATA_SHEET_NAME: &str = "Dados";
/// Name of the optional colors sheet.
pub const COLORS_SHEET_NAME: &str = "Cores";

/// Which of the expected sheets a workbook has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutReport {
    pub has_config: bool,
    pub has_data: bool,
    pub has_colors: bool,
}

impl LayoutReport {
    /// The layout is valid when both required sheets are present; colors are optional.
    pub fn is_valid(&self) -> bool {
        self.has_config && self.has_data
    }
}

/// Matches sheet names exactly (case-sensitive) against the expected layout.
pub fn check_layout<S: AsRef<str>>(sheet_names: &[S]) -> LayoutReport {
    let has = |name: &str| sheet_names.iter().any(|s| s.as_ref() == name);
    LayoutReport {
        has_config: CONFIG_SHEET_NAMES.iter().any(|&n| has(n)),
        has_data: has(DATA_SHEET_NAME),
        has_colors: has(COLORS_SHEET_NAME),
    }
}
