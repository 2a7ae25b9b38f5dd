use crate::error::Result;
use crate::reader::SvmLightReader;
use crate::record::Record;
use crate::source::LineSource;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

/// Dense row-major block of decoded records
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// `rows * num_features` feature values
    pub features: Vec<f64>,
    /// `rows * label_width` label values
    pub labels: Vec<f64>,
    pub rows: usize,
    pub num_features: usize,
    pub label_width: usize,
}

/// Reads every remaining record, stopping at the first malformed line
pub fn read_all<S: LineSource>(reader: &mut SvmLightReader<S>) -> Result<Vec<Record>> {
    reader.collect()
}

/// Loads up to `batch_size` records into a dense batch
///
/// # Arguments
/// * `reader` - Reader positioned at the first record of the batch
/// * `batch_size` - Maximum number of rows
///
/// # Returns
/// Option containing the batch if any record was left
pub fn load_batch<S: LineSource>(
    reader: &mut SvmLightReader<S>,
    batch_size: usize,
) -> Result<Option<Batch>> {
    let num_features = reader.config().num_features();
    let mut features = Vec::with_capacity(batch_size * num_features);
    let mut labels = Vec::new();
    let mut label_width = None;
    let mut rows = 0;

    while rows < batch_size && reader.has_next()? {
        let record = reader.read_next()?;
        label_width.get_or_insert(record.labels.len());
        features.extend_from_slice(&record.features);
        labels.extend(record.labels.iter().map(|v| v.as_f64()));
        rows += 1;
    }

    if rows == 0 {
        return Ok(None);
    }

    Ok(Some(Batch {
        features,
        labels,
        rows,
        num_features,
        label_width: label_width.unwrap_or(0),
    }))
}

/// Shuffles records in place, reproducibly when a seed is given
pub fn shuffle_records(records: &mut [Record], seed: Option<u64>) {
    match seed {
        Some(seed) => records.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => records.shuffle(&mut thread_rng()),
    }
}

/// Splits records into training and validation sets
///
/// # Arguments
/// * `records` - All records
/// * `validation_ratio` - Fraction of records to use for validation, taken from the front
///
/// # Returns
/// Tuple of (train, validation)
pub fn split_data(records: &[Record], validation_ratio: f64) -> (&[Record], &[Record]) {
    let ratio = validation_ratio.clamp(0.0, 1.0);
    let validation_size = (records.len() as f64 * ratio) as usize;
    let (validation, train) = records.split_at(validation_size);
    (train, validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use crate::test_utils::{assert_close, memory_reader};

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                features: vec![i as f64],
                labels: vec![Value::Int(i as i64)],
            })
            .collect()
    }

    #[test]
    fn test_load_batch() {
        let mut reader = memory_reader(3, &["1 0:0.5", "# skip", "0 2:1.5", "1.5 1:2.0"]);

        let batch = load_batch(&mut reader, 2).unwrap().unwrap();
        assert_eq!(batch.rows, 2);
        assert_eq!(batch.num_features, 3);
        assert_eq!(batch.label_width, 1);
        assert_eq!(batch.features, vec![0.5, 0.0, 0.0, 0.0, 0.0, 1.5]);
        assert_eq!(batch.labels, vec![1.0, 0.0]);

        let batch = load_batch(&mut reader, 2).unwrap().unwrap();
        assert_eq!(batch.rows, 1);
        assert_close(batch.labels[0], 1.5, 1e-12);

        assert!(load_batch(&mut reader, 2).unwrap().is_none());
    }

    #[test]
    fn test_read_all_stops_on_error() {
        let mut reader = memory_reader(1, &["1 0:1.0", "1 3:1.0"]);
        assert!(read_all(&mut reader).is_err());
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let mut a = records(20);
        let mut b = records(20);
        shuffle_records(&mut a, Some(42));
        shuffle_records(&mut b, Some(42));
        assert_eq!(a, b);

        let mut sorted: Vec<i64> = a
            .iter()
            .map(|r| match r.labels[0] {
                Value::Int(v) => v,
                Value::Float(_) => panic!(),
            })
            .collect();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<i64>>());
    }

    #[test]
    fn test_split_data() {
        let all = records(10);
        let (train, validation) = split_data(&all, 0.2);
        assert_eq!(validation.len(), 2);
        assert_eq!(train.len(), 8);
        assert_eq!(validation[0], all[0]);

        let (train, validation) = split_data(&all, 0.0);
        assert_eq!(train.len(), 10);
        assert!(validation.is_empty());
    }
}
