use serde::Serialize;

/// Observability snapshot for one input; has no effect on conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionInfo {
    pub has_chinese: bool,
    pub chinese_count: usize,
    /// Length in characters.
    pub total_length: usize,
    /// 0.0 for empty input.
    pub chinese_percentage: f64,
    pub converter_available: bool,
    pub pronunciation_map_size: usize,
}

impl ConversionInfo {
    pub(crate) fn new(
        chinese_count: usize,
        total_length: usize,
        converter_available: bool,
        pronunciation_map_size: usize,
    ) -> Self {
        let chinese_percentage = if total_length == 0 {
            0.0
        } else {
            chinese_count as f64 / total_length as f64 * 100.0
        };
        Self {
            has_chinese: chinese_count > 0,
            chinese_count,
            total_length,
            chinese_percentage,
            converter_available,
            pronunciation_map_size,
        }
    }
}
