//! Rewind storage.
//!
//! States are grouped into buckets of N frames (one second at the default
//! 60). The first state of a bucket is a full snapshot; the rest are diff
//! streams against that snapshot, which keeps per-frame cost small while
//! bounding the chain length needed to restore any state.

use crate::error::DotboyError;
use crate::gameboy::GameBoy;
use crate::state::{Archive, Sink, SliceSource, Source, VecSink};
use std::collections::VecDeque;

const DEFAULT_MAX_BYTES: usize = 256 * 1024 * 1024;
const DEFAULT_MAX_BUCKETS: usize = 100_000;
const DEFAULT_FRAMES_PER_BUCKET: usize = 60;

/// One (start, length, bytes) run of differing data.
struct DiffEntry {
    start: u32,
    data: Vec<u8>,
}

impl DiffEntry {
    fn write_to(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&self.start.to_le_bytes());
        output.push(self.data.len() as u8);
        output.extend_from_slice(&self.data);
    }

    fn contains(&self, index: usize) -> bool {
        index >= self.start as usize && index < self.start as usize + self.data.len()
    }

    fn last_index(&self) -> usize {
        self.start as usize + self.data.len() - 1
    }
}

/// Sink that encodes the difference between a base snapshot and the bytes
/// being written. Runs of identical bytes produce no output; a run capped
/// at 0xff bytes is flushed and the next difference opens a new record.
pub struct DiffSink<'a> {
    base: &'a [u8],
    base_index: usize,
    current: Option<DiffEntry>,
    output: Vec<u8>,
    error: bool,
}

impl<'a> DiffSink<'a> {
    pub fn new(base: &'a [u8]) -> DiffSink<'a> {
        DiffSink {
            base,
            base_index: 0,
            current: None,
            output: Vec::new(),
            error: false,
        }
    }

    fn flush(&mut self) {
        if let Some(entry) = self.current.take() {
            entry.write_to(&mut self.output);
        }
    }

    pub fn finish(mut self) -> Result<Vec<u8>, DotboyError> {
        self.flush();
        if self.error {
            return Err(DotboyError::InconsistentStateDiff);
        }
        Ok(self.output)
    }
}

impl Sink for DiffSink<'_> {
    fn write(&mut self, byte: u8) {
        let Some(&existing) = self.base.get(self.base_index) else {
            // Writing past the base means the two streams disagree in shape
            self.error = true;
            return;
        };
        self.base_index += 1;

        if existing != byte {
            match &mut self.current {
                Some(entry) => {
                    entry.data.push(byte);
                    if entry.data.len() == 0xff {
                        self.flush();
                    }
                }
                None => {
                    self.current = Some(DiffEntry {
                        start: (self.base_index - 1) as u32,
                        data: vec![byte],
                    });
                }
            }
        } else if self.current.is_some() {
            self.flush();
        }
    }
}

/// Source that replays a base snapshot with a diff stream spliced in.
/// Records must appear in ascending order and never overlap.
pub struct DiffSource<'a> {
    base: SliceSource<'a>,
    diff: &'a [u8],
    diff_index: usize,
    current: Option<DiffEntry>,
    error: bool,
}

impl<'a> DiffSource<'a> {
    pub fn new(base: &'a [u8], diff: &'a [u8]) -> DiffSource<'a> {
        DiffSource {
            base: SliceSource::new(base),
            diff,
            diff_index: 0,
            current: None,
            error: false,
        }
    }

    fn load_entry(&mut self, position: usize) {
        if self.current.is_some() || self.diff_index >= self.diff.len() {
            return;
        }

        if self.diff_index + 5 > self.diff.len() {
            self.error = true;
            self.diff_index = self.diff.len();
            return;
        }

        let start = u32::from_le_bytes(
            self.diff[self.diff_index..self.diff_index + 4]
                .try_into()
                .unwrap(),
        );
        let length = self.diff[self.diff_index + 5 - 1] as usize;
        self.diff_index += 5;

        if self.diff_index + length > self.diff.len() {
            self.error = true;
            self.diff_index = self.diff.len();
            return;
        }

        let data = self.diff[self.diff_index..self.diff_index + length].to_vec();
        self.diff_index += length;

        // A record starting before the byte being read is out of order or
        // overlaps the previous record
        if (start as usize) < position || length == 0 {
            self.error = true;
            return;
        }

        self.current = Some(DiffEntry { start, data });
    }

    pub fn finish(self) -> Result<(), DotboyError> {
        if self.error || self.base.overrun() {
            return Err(DotboyError::InconsistentStateDiff);
        }
        Ok(())
    }
}

impl Source for DiffSource<'_> {
    fn read(&mut self) -> u8 {
        let position = self.base.position();
        let base_byte = self.base.read();

        self.load_entry(position);

        if let Some(entry) = &self.current {
            if entry.contains(position) {
                let byte = entry.data[position - entry.start as usize];
                if position == entry.last_index() {
                    self.current = None;
                }
                return byte;
            }
        }

        base_byte
    }
}

struct State {
    ticks: u64,
    data: Vec<u8>,
}

struct Bucket {
    states: Vec<State>,
}

pub struct Rewind {
    max_bytes: usize,
    max_buckets: usize,
    frames_per_bucket: usize,
    buckets: VecDeque<Bucket>,
}

impl Rewind {
    pub fn new(max_bytes: usize, max_buckets: usize, frames_per_bucket: usize) -> Rewind {
        assert!(
            max_bytes > 0 && max_buckets > 0 && frames_per_bucket > 0,
            "Rewind limits must be greater than 0"
        );
        Rewind {
            max_bytes,
            max_buckets,
            frames_per_bucket,
            buckets: VecDeque::new(),
        }
    }

    pub fn used_bytes(&self) -> usize {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.states.iter())
            .map(|state| state.data.len())
            .sum()
    }

    pub fn state_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.states.len()).sum()
    }

    pub fn is_at_capacity(&self) -> bool {
        self.used_bytes() >= self.max_bytes || self.buckets.len() >= self.max_buckets
    }

    /// Dot counter of the oldest stored state, if any.
    pub fn first_ticks(&self) -> Option<u64> {
        self.buckets
            .front()
            .and_then(|bucket| bucket.states.first())
            .map(|state| state.ticks)
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Captures the current machine state.
    pub fn push_state(&mut self, gb: &mut GameBoy) -> Result<(), DotboyError> {
        let ticks = gb.dots();

        let start_new_bucket = match self.buckets.back() {
            Some(bucket) => bucket.states.len() >= self.frames_per_bucket,
            None => true,
        };
        if start_new_bucket {
            self.buckets.push_back(Bucket { states: Vec::new() });
        }

        let bucket = self.buckets.back_mut().expect("bucket was just prepared");
        let data = if bucket.states.is_empty() {
            let mut sink = VecSink::new();
            gb.serialize(&mut Archive::Save(&mut sink));
            sink.buffer
        } else {
            let mut sink = DiffSink::new(&bucket.states[0].data);
            gb.serialize(&mut Archive::Save(&mut sink));
            sink.finish()?
        };

        bucket.states.push(State { ticks, data });

        // FIFO eviction under both budgets
        while self.is_at_capacity() {
            self.buckets.pop_front();
        }

        Ok(())
    }

    /// Restores and removes the most recent state. Returns false when no
    /// states remain.
    pub fn pop_state(&mut self, gb: &mut GameBoy) -> Result<bool, DotboyError> {
        let Some(bucket) = self.buckets.back_mut() else {
            return Ok(false);
        };

        if bucket.states.len() <= 1 {
            if let Some(state) = bucket.states.first() {
                let mut source = SliceSource::new(&state.data);
                gb.serialize(&mut Archive::Load(&mut source));
            }
            self.buckets.pop_back();
        } else {
            {
                let (base, rest) = bucket.states.split_first().expect("bucket is non-empty");
                let newest = rest.last().expect("bucket holds at least two states");
                let mut source = DiffSource::new(&base.data, &newest.data);
                gb.serialize(&mut Archive::Load(&mut source));
                source.finish()?;
            }
            bucket.states.pop();
        }

        Ok(true)
    }
}

impl Default for Rewind {
    fn default() -> Rewind {
        Rewind::new(
            DEFAULT_MAX_BYTES,
            DEFAULT_MAX_BUCKETS,
            DEFAULT_FRAMES_PER_BUCKET,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_diff(base: &[u8], modified: &[u8]) -> Vec<u8> {
        let mut sink = DiffSink::new(base);
        for byte in modified {
            sink.write(*byte);
        }
        sink.finish().expect("diff encoding failed")
    }

    fn restore(base: &[u8], diff: &[u8], len: usize) -> Vec<u8> {
        let mut source = DiffSource::new(base, diff);
        let result = (0..len).map(|_| source.read()).collect();
        source.finish().expect("diff decoding failed");
        result
    }

    #[test]
    fn identical_buffers_diff_to_nothing() {
        let base = vec![7; 1024];
        assert!(apply_diff(&base, &base).is_empty());
    }

    #[test]
    fn diff_round_trips_scattered_changes() {
        let base: Vec<u8> = (0..=255).cycle().take(2048).collect();
        let mut modified = base.clone();
        modified[0] = 0xaa;
        modified[500] = 0xbb;
        modified[501] = 0xbc;
        modified[2047] = 0xcc;

        let diff = apply_diff(&base, &modified);
        assert!(diff.len() < 40);
        assert_eq!(restore(&base, &diff, base.len()), modified);
    }

    #[test]
    fn long_runs_split_at_record_capacity() {
        let base = vec![0u8; 1024];
        let modified = vec![1u8; 1024];

        let diff = apply_diff(&base, &modified);
        assert_eq!(restore(&base, &diff, base.len()), modified);
    }

    #[test]
    fn writing_past_the_base_is_an_error() {
        let base = vec![0u8; 4];
        let mut sink = DiffSink::new(&base);
        for _ in 0..5 {
            sink.write(1);
        }
        assert!(sink.finish().is_err());
    }

    #[test]
    fn out_of_order_records_are_rejected() {
        let base = vec![0u8; 16];
        let mut diff = Vec::new();
        DiffEntry {
            start: 8,
            data: vec![1],
        }
        .write_to(&mut diff);
        DiffEntry {
            start: 2,
            data: vec![2],
        }
        .write_to(&mut diff);

        let mut source = DiffSource::new(&base, &diff);
        for _ in 0..16 {
            source.read();
        }
        assert!(source.finish().is_err());
    }
}
