#[cfg(test)]
use crate::{Configuration, MemoryLineSource, SvmLightReader, NUM_FEATURES};

/// Asserts that two floating point values are approximately equal
///
/// # Arguments
/// * `a` - First value
/// * `b` - Second value
/// * `epsilon` - Maximum allowed difference
#[cfg(test)]
pub fn assert_close(a: f64, b: f64, epsilon: f64) {
    assert!((a - b).abs() <= epsilon, "{} != {} (epsilon {})", a, b, epsilon);
}

/// Builds a reader with default options over in-memory lines
///
/// # Arguments
/// * `num_features` - Number of features per record
/// * `lines` - Raw input lines
#[cfg(test)]
pub fn memory_reader(num_features: usize, lines: &[&str]) -> SvmLightReader<MemoryLineSource> {
    let conf = Configuration::new().with(NUM_FEATURES, num_features);
    let source = MemoryLineSource::new(lines.iter().map(|l| l.to_string()).collect());
    SvmLightReader::from_configuration(&conf, source).unwrap()
}
