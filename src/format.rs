/// Explicit formatting configuration for the output layer, passed to the
/// session instead of living in a global (the report width and the raw-row
/// page size are presentation choices, not statistics).
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Width of the divider line between report sections.
    pub divider_width: usize,
    /// Raw rows shown per pagination step.
    pub page_size: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            divider_width: 40,
            page_size: 5,
        }
    }
}

impl FormatOptions {
    /// The section divider line.
    pub fn divider(&self) -> String {
        "-".repeat(self.divider_width)
    }
}
