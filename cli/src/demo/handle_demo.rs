use crate::post::demo_result::DemoResult;
use anyhow::Context;
use circbuf::buffer::{Element, RingBuffer};
use circbuf::general::InputValueError;
use log::info;
use std::fmt::Debug;

/// handle_demo creates a buffer of the inserted capacity, pushes all values to it, evaluates its
/// statistics and finally removes the maximum value. The results are returned for
/// post-processing.
pub fn handle_demo<T: Element + Debug>(
    capacity: usize,
    vals: &[T],
    time_idx: usize,
    print_debug: bool,
) -> anyhow::Result<DemoResult<T>> {
    // create the buffer and fill it
    let mut buffer: RingBuffer<T> =
        RingBuffer::new(capacity).context("Failed to create the ring buffer!")?;

    for &val in vals.iter() {
        buffer.push(val);
    }

    info!(
        "Pushed {} values, buffer holds {} of {} possible values",
        vals.len(),
        buffer.len(),
        buffer.capacity()
    );

    if print_debug {
        println!(
            "DEBUG: Buffer content (oldest first): {:?}",
            buffer.straightened_copy().as_slice()
        );
    }

    // evaluate statistics
    let value_at_time_idx = buffer.get_at(time_idx).context(format!(
        "Failed to read the value at time index {}!",
        time_idx
    ))?;

    let argmax_storage_idx = buffer
        .get_argmax()
        .ok_or(InputValueError)
        .context("Cannot determine the maximum of an empty buffer!")?;
    let argmax_time_idx = buffer.storage_to_time_idx(argmax_storage_idx)?;

    let min = buffer.min();
    let max = buffer.max();
    let mean = buffer.mean();

    // remove the maximum value
    buffer
        .remove_at_time_idx(argmax_time_idx)
        .context("Failed to remove the maximum value!")?;

    if print_debug {
        println!(
            "DEBUG: Buffer content after removal (oldest first): {:?}",
            buffer.to_vec()
        );
    }

    Ok(DemoResult {
        capacity,
        no_pushed: vals.len(),
        time_idx,
        value_at_time_idx,
        min,
        max,
        mean,
        argmax_storage_idx,
        argmax_time_idx,
        len_after_removal: buffer.len(),
        max_after_removal: buffer.get_max(),
    })
}
