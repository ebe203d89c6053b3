use crate::validate::ValidCommand;

/// Consumer of one drained frame of commands.
///
/// The sequence is validated and in paint order (later commands paint over
/// earlier ones). Resolving asset ids and any execution failure belong to the
/// implementor.
pub trait Submitter {
    fn submit(&mut self, commands: Vec<ValidCommand>);
}

impl<F> Submitter for F
where
    F: FnMut(Vec<ValidCommand>),
{
    #[inline]
    fn submit(&mut self, commands: Vec<ValidCommand>) {
        self(commands)
    }
}

/// Submitter that keeps every frame it receives, for replay or inspection.
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    frames: Vec<Vec<ValidCommand>>,
}

impl FrameRecorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded frames, oldest first.
    #[inline]
    pub fn frames(&self) -> &[Vec<ValidCommand>] {
        &self.frames
    }

    #[inline]
    pub fn last_frame(&self) -> Option<&[ValidCommand]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Re-submits every recorded frame, in order, to `target`.
    pub fn replay<S: Submitter + ?Sized>(&self, target: &mut S) {
        for frame in &self.frames {
            target.submit(frame.clone());
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    #[inline]
    pub fn into_frames(self) -> Vec<Vec<ValidCommand>> {
        self.frames
    }
}

impl Submitter for FrameRecorder {
    fn submit(&mut self, commands: Vec<ValidCommand>) {
        log::trace!("recording frame {} ({} commands)", self.frames.len(), commands.len());
        self.frames.push(commands);
    }
}
