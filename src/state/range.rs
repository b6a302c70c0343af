use rayon::prelude::*;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{TrashError, TrashResult};
use crate::state::trash_state::TrashState;

/// Options controlling [`TrashState::render_range`].
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Render frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Frames rendered per parallel batch before they are handed to the sink.
    pub chunk_size: usize,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            chunk_size: 64,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Bytes across all pushed frames.
    pub bytes_total: u64,
}

impl TrashState {
    /// Render a frame range and stream it into a sink.
    ///
    /// The sink receives frames in strictly increasing index order, also when `parallel` is set.
    /// The stored frame is left untouched.
    #[tracing::instrument(skip(self, sink), fields(frames = self.frame_count()))]
    pub fn render_range(
        &self,
        range: FrameRange,
        opts: RenderOpts,
        sink: &mut dyn FrameSink,
    ) -> TrashResult<RenderStats> {
        if range.is_empty() {
            return Err(TrashError::invalid_input(format!(
                "empty frame range [{}, {})",
                range.start, range.end
            )));
        }
        if range.end.0 > self.frame_count() {
            return Err(TrashError::index_out_of_range(range.end.0 - 1, self.frame_count()));
        }

        sink.begin(SinkConfig {
            frames: range.len_frames(),
            max_frame_len: self.max_frame_len(),
        })?;

        let mut stats = RenderStats::default();
        let mut push = |idx: FrameIndex, frame: &str| -> TrashResult<()> {
            sink.push_frame(idx, frame)?;
            stats.frames_total += 1;
            stats.bytes_total += frame.len() as u64;
            Ok(())
        };

        if opts.parallel {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(n) = opts.threads {
                builder = builder.num_threads(n);
            }
            let pool = builder
                .build()
                .map_err(|e| TrashError::Other(anyhow::anyhow!("build render thread pool: {e}")))?;

            let chunk = opts.chunk_size.max(1);
            let start = range.start.0 as usize;
            let end = range.end.0 as usize;
            for batch_start in (start..end).step_by(chunk) {
                let batch_end = (batch_start + chunk).min(end);
                let frames: Vec<String> = pool.install(|| {
                    (batch_start..batch_end)
                        .into_par_iter()
                        .map(|f| self.render_owned(f))
                        .collect::<TrashResult<Vec<_>>>()
                })?;
                for (off, frame) in frames.iter().enumerate() {
                    push(FrameIndex((batch_start + off) as u64), frame)?;
                }
            }
        } else {
            let mut buf = String::new();
            buf.try_reserve_exact(self.max_frame_len())?;
            for idx in range.iter() {
                buf.clear();
                self.render_into(idx.0 as usize, &mut buf);
                push(idx, &buf)?;
            }
        }

        sink.end()?;
        tracing::debug!(
            frames = stats.frames_total,
            bytes = stats.bytes_total,
            "range rendered"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/range.rs"]
mod tests;
