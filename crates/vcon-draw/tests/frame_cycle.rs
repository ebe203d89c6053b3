use std::thread;

use vcon_draw::{
    BufferConfig, CircleCmd, ClearCmd, Command, CommandBuffer, CommandKind, DrawError, FrameRecorder,
    LineCmd, RectCmd, Rgba8, SpriteCmd, Submitter, TextCmd, ValidCommand, ValidationErrorKind,
};

fn scene() -> Vec<Command> {
    vec![
        ClearCmd::new(Rgba8::OPAQUE_BLACK).into(),
        RectCmd::new(100.0, 100.0, -40.0, -20.0, Rgba8::rgb(40, 40, 60)).into(),
        LineCmd::new(0.0, 0.0, 320.0, 240.0, Rgba8::rgb(255, 0, 0)).with_thickness(2.0).into(),
        CircleCmd::new(160.0, 120.0, 30.0, Rgba8::rgb(0, 255, 0)).with_filled(false).into(),
        SpriteCmd::new("ship", 50.0, 50.0).with_rotation(-1.5).into(),
        TextCmd::new("SCORE 000", 8.0, 8.0).with_size(12.0).into(),
    ]
}

#[test]
fn frames_arrive_in_paint_order() {
    let mut buffer = CommandBuffer::with_config(BufferConfig::default().with_initial_capacity(8));
    let mut renderer = FrameRecorder::new();

    for _ in 0..3 {
        for cmd in scene() {
            buffer.push(cmd).unwrap();
        }
        assert_eq!(buffer.submit_to(&mut renderer), 6);
    }

    assert_eq!(buffer.frame_index(), 3);
    assert_eq!(renderer.frames().len(), 3);

    let kinds: Vec<_> = renderer.frames()[0].iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        [
            CommandKind::Clear,
            CommandKind::Rect,
            CommandKind::Line,
            CommandKind::Circle,
            CommandKind::Sprite,
            CommandKind::Text
        ]
    );

    let Command::Rect(r) = renderer.frames()[2][1].as_command() else {
        panic!("expected rect in slot 1");
    };
    assert_eq!((r.x, r.y, r.w, r.h), (60.0, 80.0, 40.0, 20.0));
}

#[test]
fn rejected_commands_do_not_disturb_the_frame() {
    let mut buffer = CommandBuffer::with_config(BufferConfig::default().with_max_commands(3));

    buffer.push(ClearCmd::new(Rgba8::OPAQUE_WHITE).into()).unwrap();
    let err = buffer.push(SpriteCmd::new("", 0.0, 0.0).into()).unwrap_err();
    let DrawError::Validation(v) = err else { panic!("expected validation error") };
    assert_eq!(v.kind, ValidationErrorKind::EmptyRequiredField);

    buffer.push(TextCmd::new("", 0.0, 0.0).into()).unwrap();
    buffer.push(TextCmd::new("", 1.0, 0.0).into()).unwrap();
    assert!(matches!(
        buffer.push(TextCmd::new("", 2.0, 0.0).into()),
        Err(DrawError::Capacity(_))
    ));

    assert_eq!(buffer.len(), 3);
    buffer.reset();
    assert!(buffer.drain().is_empty());
}

#[test]
fn one_buffer_per_producer_merged_by_submitter() {
    let producers: Vec<_> = (0..4u8)
        .map(|id| {
            thread::spawn(move || {
                let mut buffer = CommandBuffer::new();
                for i in 0..10u8 {
                    let color = Rgba8::rgb(id, i, 0);
                    buffer.push(LineCmd::new(0.0, 0.0, 1.0, 1.0, color).into()).unwrap();
                }
                buffer.drain()
            })
        })
        .collect();

    let mut merged: Vec<ValidCommand> = Vec::new();
    let mut sink = |frame: Vec<ValidCommand>| merged.extend(frame);
    for handle in producers {
        sink.submit(handle.join().unwrap());
    }

    assert_eq!(merged.len(), 40);
    for (chunk, id) in merged.chunks(10).zip(0u8..) {
        let greens: Vec<u8> = chunk.iter().map(|c| c.color().g).collect();
        assert_eq!(greens, (0..10).collect::<Vec<u8>>());
        assert!(chunk.iter().all(|c| c.color().r == id));
    }
}

#[test]
fn recorded_frames_replay_identically() {
    let mut buffer = CommandBuffer::new();
    let mut first = FrameRecorder::new();
    for cmd in scene() {
        buffer.push(cmd).unwrap();
    }
    buffer.submit_to(&mut first);

    let mut second = FrameRecorder::new();
    first.replay(&mut second);
    assert_eq!(first.frames(), second.frames());
}
