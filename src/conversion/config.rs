//! Configuration options for running a conversion

/// Default input size limit (100MB)
pub const DEFAULT_MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Strip surrounding whitespace for operations that accept it
    pub trim_input: bool,
    /// Largest accepted input in bytes
    pub max_input_size: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            trim_input: true,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable input trimming
    pub fn with_trim_input(mut self, trim: bool) -> Self {
        self.trim_input = trim;
        self
    }

    /// Set the input size limit
    pub fn with_max_input_size(mut self, limit_bytes: usize) -> Self {
        self.max_input_size = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_size == 0 {
            return Err("Max input size must be at least 1 byte".to_string());
        }
        Ok(())
    }
}

/// Parse a size string such as `100MB`, `512KB`, `1GB`, `64B` or a plain byte count.
pub fn parse_size(limit: &str) -> Result<usize, String> {
    let limit_str = limit.trim().to_uppercase();
    let invalid = || format!("Invalid size: {}", limit);

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        return size.trim().parse::<usize>().map_err(|_| invalid());
    } else {
        return limit_str.parse::<usize>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
}
