//! Device configuration for local inference.

use crate::error::{MassclassError, Result};

/// Compute device for local inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// CPU execution (default).
    #[default]
    Cpu,

    /// CUDA GPU execution.
    #[cfg(feature = "cuda")]
    Cuda {
        /// GPU device ID (0-indexed).
        device_id: u32,
    },
}

impl Device {
    /// Create CPU device.
    pub fn cpu() -> Self {
        Self::Cpu
    }

    /// Create CUDA device with the given device ID.
    #[cfg(feature = "cuda")]
    pub fn cuda(device_id: u32) -> Self {
        Self::Cuda { device_id }
    }

    /// Parse a configured device name (`"cpu"`, `"cuda"` or `"cuda:N"`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            #[cfg(feature = "cuda")]
            "cuda" => Ok(Self::Cuda { device_id: 0 }),
            #[cfg(feature = "cuda")]
            other if other.starts_with("cuda:") => other["cuda:".len()..]
                .parse()
                .map(|device_id| Self::Cuda { device_id })
                .map_err(|_| MassclassError::Configuration(format!("invalid device: {name}"))),
            _ => Err(MassclassError::Configuration(format!(
                "unsupported device: {name}"
            ))),
        }
    }

    /// Get the device name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            #[cfg(feature = "cuda")]
            Self::Cuda { .. } => "CUDA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cpu() {
        assert_eq!(Device::default(), Device::Cpu);
    }

    #[test]
    fn cpu_name() {
        assert_eq!(Device::cpu().name(), "CPU");
    }

    #[test]
    fn parse_cpu() {
        assert_eq!(Device::from_name("CPU").unwrap(), Device::Cpu);
    }

    #[cfg(not(feature = "cuda"))]
    #[test]
    fn cuda_rejected_without_feature() {
        assert!(Device::from_name("cuda").is_err());
    }

    #[cfg(feature = "cuda")]
    #[test]
    fn parse_cuda_with_id() {
        assert_eq!(Device::from_name("cuda:1").unwrap(), Device::cuda(1));
        assert_eq!(Device::from_name("cuda").unwrap(), Device::cuda(0));
    }
}
