use std::fmt::{Display, Write};

/// DemoResult contains all buffer information that is required for post-processing the results.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoResult<T> {
    pub capacity: usize,
    pub no_pushed: usize,
    pub time_idx: usize,
    pub value_at_time_idx: T,
    pub min: T,
    pub max: T,
    pub mean: f64,
    pub argmax_storage_idx: usize,
    pub argmax_time_idx: usize,
    pub len_after_removal: usize,
    pub max_after_removal: Option<T>,
}

impl<T: Display> DemoResult<T> {
    /// print_results prints the evaluated statistics to the console output.
    pub fn print_results(&self) {
        let mut tmp_string = String::new();

        writeln!(
            &mut tmp_string,
            "value at time index {}: {}",
            self.time_idx, self.value_at_time_idx
        )
        .unwrap();
        writeln!(&mut tmp_string, "min value: {}", self.min).unwrap();
        writeln!(&mut tmp_string, "max value: {}", self.max).unwrap();
        writeln!(&mut tmp_string, "mean value: {:.3}", self.mean).unwrap();
        writeln!(
            &mut tmp_string,
            "argmax: storage index {}, time index {}",
            self.argmax_storage_idx, self.argmax_time_idx
        )
        .unwrap();

        match &self.max_after_removal {
            Some(max) => write!(
                &mut tmp_string,
                "max value after removing the maximum: {} ({} values left)",
                max, self.len_after_removal
            )
            .unwrap(),
            None => write!(
                &mut tmp_string,
                "buffer is empty after removing the maximum"
            )
            .unwrap(),
        }

        println!(
            "RESULT: Buffer of capacity {} after {} pushes",
            self.capacity, self.no_pushed
        );
        println!("{}", tmp_string);
    }
}
