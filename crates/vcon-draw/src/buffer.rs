use crate::command::Command;
use crate::error::{CapacityExceeded, DrawError};
use crate::submit::Submitter;
use crate::validate::{ValidCommand, validate};

/// Per-buffer configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferConfig {
    /// Maximum commands accepted per frame. `None` = unbounded.
    pub max_commands: Option<usize>,
    /// Capacity reserved up front.
    pub initial_capacity: usize,
}

impl BufferConfig {
    #[inline]
    pub fn with_max_commands(mut self, max: usize) -> Self {
        self.max_commands = Some(max);
        self
    }

    #[inline]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

/// Observable buffer state.
///
/// Draining happens under `&mut self`, so no append can interleave with it
/// and it never shows up here.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferState {
    Empty,
    Accumulating,
}

/// Ordered draw commands for one frame.
///
/// Insertion order is paint order. Single producer: the buffer is not
/// internally synchronized; use one buffer per producer thread.
///
/// Performance characteristics:
/// - `append()` is O(1) amortized
/// - `drain()` moves the sequence out without copying commands
/// - `reset()` keeps allocated capacity for reuse
///
/// ```
/// use vcon_draw::{CommandBuffer, FrameRecorder, LineCmd, Rgba8};
///
/// let mut buffer = CommandBuffer::new();
/// buffer.push(LineCmd::new(0.0, 0.0, 10.0, 10.0, Rgba8::OPAQUE_WHITE).into()).unwrap();
///
/// let mut renderer = FrameRecorder::new();
/// buffer.submit_to(&mut renderer);
/// assert!(buffer.is_empty());
/// assert_eq!(renderer.frames().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<ValidCommand>,
    config: BufferConfig,
    frame_index: u64,
}

impl CommandBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            commands: Vec::with_capacity(reserve_for(&config)),
            config,
            frame_index: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn state(&self) -> BufferState {
        if self.commands.is_empty() {
            BufferState::Empty
        } else {
            BufferState::Accumulating
        }
    }

    /// Commands still admissible this frame. `None` = unbounded.
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.config
            .max_commands
            .map(|max| max.saturating_sub(self.commands.len()))
    }

    /// Number of completed drain/reset cycles.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Commands in insertion (paint) order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ValidCommand> {
        self.commands.iter()
    }

    /// Appends an admitted command to the tail.
    ///
    /// Fails only when `max_commands` is set and already reached; the buffer
    /// is left unchanged in that case.
    pub fn append(&mut self, cmd: ValidCommand) -> Result<(), CapacityExceeded> {
        if let Some(limit) = self.config.max_commands {
            if self.commands.len() >= limit {
                log::warn!(
                    "frame {}: rejected {} command, buffer full ({limit})",
                    self.frame_index,
                    cmd.kind()
                );
                return Err(CapacityExceeded { limit });
            }
        }

        log::trace!("frame {}: append {} #{}", self.frame_index, cmd.kind(), self.commands.len());
        self.commands.push(cmd);
        Ok(())
    }

    /// Validates then appends.
    #[inline]
    pub fn push(&mut self, cmd: Command) -> Result<(), DrawError> {
        let valid = validate(cmd)?;
        self.append(valid)?;
        Ok(())
    }

    /// Takes the whole sequence in insertion order and leaves the buffer empty.
    ///
    /// Draining an empty buffer returns an empty sequence.
    pub fn drain(&mut self) -> Vec<ValidCommand> {
        let drained = std::mem::take(&mut self.commands);
        self.commands.reserve(reserve_for(&self.config));
        log::debug!("frame {}: drained {} commands", self.frame_index, drained.len());
        self.frame_index = self.frame_index.wrapping_add(1);
        drained
    }

    /// Discards the current frame without handing it to anyone.
    pub fn reset(&mut self) {
        log::debug!("frame {}: reset, discarding {} commands", self.frame_index, self.commands.len());
        self.commands.clear();
        self.frame_index = self.frame_index.wrapping_add(1);
    }

    /// Drains and hands the frame to `submitter`. Returns the submitted count.
    pub fn submit_to<S: Submitter + ?Sized>(&mut self, submitter: &mut S) -> usize {
        let frame = self.drain();
        let count = frame.len();
        submitter.submit(frame);
        log::debug!("frame {}: submitted {count} commands", self.frame_index.wrapping_sub(1));
        count
    }
}

/// Never reserve beyond what the cap can admit.
#[inline]
fn reserve_for(config: &BufferConfig) -> usize {
    match config.max_commands {
        Some(max) => config.initial_capacity.min(max),
        None => config.initial_capacity,
    }
}

impl<'a> IntoIterator for &'a CommandBuffer {
    type Item = &'a ValidCommand;
    type IntoIter = std::slice::Iter<'a, ValidCommand>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::command::{CircleCmd, ClearCmd, LineCmd, RectCmd, TextCmd};
    use crate::submit::FrameRecorder;

    fn valid(cmd: impl Into<Command>) -> ValidCommand {
        validate(cmd.into()).unwrap()
    }

    fn line(i: u8) -> ValidCommand {
        valid(LineCmd::new(0.0, 0.0, f32::from(i), 1.0, Rgba8::rgb(i, 0, 0)))
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn starts_empty() {
        let buf = CommandBuffer::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.state(), BufferState::Empty);
        assert_eq!(buf.remaining(), None);
    }

    #[test]
    fn append_then_drain_returns_single_command() {
        let mut buf = CommandBuffer::new();
        let cmd = valid(ClearCmd::new(Rgba8::OPAQUE_BLACK));
        buf.append(cmd.clone()).unwrap();
        assert_eq!(buf.state(), BufferState::Accumulating);

        assert_eq!(buf.drain(), vec![cmd]);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.state(), BufferState::Empty);
    }

    #[test]
    fn drain_preserves_insertion_order() {
        let mut buf = CommandBuffer::new();
        let cmds: Vec<_> = (0..16).map(line).collect();
        for c in &cmds {
            buf.append(c.clone()).unwrap();
        }
        assert!(buf.iter().eq(cmds.iter()));
        assert_eq!(buf.drain(), cmds);
    }

    #[test]
    fn drain_on_empty_is_empty() {
        let mut buf = CommandBuffer::new();
        assert!(buf.drain().is_empty());
        assert!(buf.drain().is_empty());
        assert_eq!(buf.frame_index(), 2);
    }

    #[test]
    fn reset_discards_and_advances_frame() {
        let mut buf = CommandBuffer::new();
        buf.append(line(1)).unwrap();
        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.frame_index(), 1);
        assert!(buf.drain().is_empty());
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn capacity_exceeded_keeps_first_commands() {
        let mut buf = CommandBuffer::with_config(BufferConfig::default().with_max_commands(2));
        buf.append(line(1)).unwrap();
        buf.append(line(2)).unwrap();
        assert_eq!(buf.remaining(), Some(0));

        let err = buf.append(line(3)).unwrap_err();
        assert_eq!(err, CapacityExceeded { limit: 2 });
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.drain(), vec![line(1), line(2)]);
    }

    #[test]
    fn capacity_applies_per_frame() {
        let mut buf = CommandBuffer::with_config(BufferConfig::default().with_max_commands(1));
        buf.append(line(1)).unwrap();
        assert!(buf.append(line(2)).is_err());
        buf.drain();
        assert_eq!(buf.remaining(), Some(1));
        buf.append(line(2)).unwrap();
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut buf = CommandBuffer::with_config(BufferConfig::default().with_max_commands(0));
        assert!(buf.append(line(1)).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn initial_capacity_is_capped_by_max() {
        let config = BufferConfig::default().with_initial_capacity(1024).with_max_commands(4);
        let buf = CommandBuffer::with_config(config);
        assert_eq!(buf.config(), &config);
        assert!(buf.commands.capacity() >= 4);
        assert!(buf.commands.capacity() < 1024);
    }

    // ── push ──────────────────────────────────────────────────────────────

    #[test]
    fn push_validates_before_appending() {
        let mut buf = CommandBuffer::new();
        let err = buf
            .push(CircleCmd::new(0.0, 0.0, f32::NAN, Rgba8::OPAQUE_WHITE).into())
            .unwrap_err();
        assert!(matches!(err, DrawError::Validation(_)));
        assert!(buf.is_empty());

        buf.push(RectCmd::new(4.0, 4.0, -2.0, 2.0, Rgba8::OPAQUE_WHITE).into()).unwrap();
        let Command::Rect(r) = buf.iter().next().unwrap().as_command() else {
            panic!("expected rect");
        };
        assert_eq!((r.x, r.w), (2.0, 2.0));
    }

    #[test]
    fn push_reports_capacity() {
        let mut buf = CommandBuffer::with_config(BufferConfig::default().with_max_commands(1));
        buf.push(TextCmd::new("a", 0.0, 0.0).into()).unwrap();
        let err = buf.push(TextCmd::new("b", 0.0, 0.0).into()).unwrap_err();
        assert_eq!(err, DrawError::Capacity(CapacityExceeded { limit: 1 }));
    }

    // ── submit ────────────────────────────────────────────────────────────

    #[test]
    fn submit_to_hands_over_frames() {
        let mut buf = CommandBuffer::new();
        let mut rec = FrameRecorder::new();

        buf.append(line(1)).unwrap();
        buf.append(line(2)).unwrap();
        assert_eq!(buf.submit_to(&mut rec), 2);
        assert_eq!(buf.submit_to(&mut rec), 0);

        assert!(buf.is_empty());
        assert_eq!(rec.frames(), &[vec![line(1), line(2)], vec![]]);
    }
}
