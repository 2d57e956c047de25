use irdata::frame::{
    within_tolerance, CaptureReader, ControlCode, DataFrame, DecodeError, FrameDecoder,
    FrameSender, Message, MIN_GAP, PROTOCOL_ID,
};
use irdata::pulse::{Pulse, PulseEmitter, PulseRecorder, RawCapture};

fn loopback(f: impl FnOnce(&mut FrameSender<PulseRecorder>)) -> RawCapture {
    let mut sender = FrameSender::new(PulseRecorder::new(MIN_GAP));
    f(&mut sender);
    sender.into_inner().into_capture()
}

#[test]
fn every_control_code_survives_the_link() {
    let decoder = FrameDecoder::new();
    for code in ControlCode::ALL {
        let msg = decoder
            .decode(&loopback(|s| s.send_control(code)))
            .expect("control frame should decode");
        assert_eq!(msg.message, Message::Control(code));
        assert_eq!(msg.protocol, PROTOCOL_ID);
    }
}

#[test]
fn data_frames_of_every_length_survive_the_link() {
    let decoder = FrameDecoder::new();
    for bits in 0..=64u8 {
        let value = 0x0123_4567_89AB_CDEFu64.rotate_left(u32::from(bits));
        let expected = DataFrame::new(value, bits).unwrap();
        let msg = decoder
            .decode(&loopback(|s| s.send_data(value, bits)))
            .expect("data frame should decode");
        assert_eq!(msg.bits, bits);
        assert_eq!(msg.as_data(), Some(&expected));
    }
}

#[test]
fn ack_scenario_emission_and_decode() {
    let mut sender = FrameSender::new(PulseRecorder::new(MIN_GAP));
    sender.send_control(ControlCode::Ack);
    let recorder = sender.into_inner();

    let mut expected = vec![Pulse::Mark(9000), Pulse::Space(4500)];
    for bit in [1, 1, 1, 1, 1, 0, 1, 1] {
        expected.push(Pulse::Mark(560));
        expected.push(Pulse::Space(if bit == 1 { 1690 } else { 560 }));
    }
    expected.push(Pulse::Mark(560));
    expected.push(Pulse::Space(0));
    assert_eq!(recorder.pulses(), expected.as_slice());

    let msg = FrameDecoder::new().decode(recorder.capture()).unwrap();
    assert_eq!(msg.as_control(), Some(ControlCode::Ack));
}

#[test]
fn oversized_payload_emits_nothing() {
    let mut sender = FrameSender::new(PulseRecorder::new(MIN_GAP));
    sender.send_data(u64::MAX, 65);
    assert!(sender.get_ref().pulses().is_empty());
}

#[test]
fn rejections_are_reported_not_panicked() {
    let decoder = FrameDecoder::new();
    assert!(matches!(
        decoder.decode(&[MIN_GAP, 9000, 4500]),
        Err(DecodeError::BufferTooShort { len: 3 })
    ));
    assert!(matches!(
        decoder.decode(&[MIN_GAP, 2000, 4500, 560, 560, 560]),
        Err(DecodeError::HeaderMismatch { .. })
    ));
}

#[test]
fn conversation_over_one_timeline() {
    let mut sender = FrameSender::new(PulseRecorder::new(MIN_GAP));
    sender.send_control(ControlCode::Start);
    for word in [0xDEADu64, 0xBEEF] {
        sender.get_mut().space(MIN_GAP);
        sender.send_data(word, 16);
    }
    sender.get_mut().space(MIN_GAP);
    sender.send_control(ControlCode::End);

    let decoder = FrameDecoder::new();
    let messages: Vec<Message> = CaptureReader::new(sender.into_inner().into_capture().into_inner())
        .map(|capture| decoder.decode(&capture).unwrap().message)
        .collect();

    assert_eq!(
        messages,
        vec![
            Message::Control(ControlCode::Start),
            Message::Data(DataFrame::new(0xDEAD, 16).unwrap()),
            Message::Data(DataFrame::new(0xBEEF, 16).unwrap()),
            Message::Control(ControlCode::End),
        ]
    );
}

#[test]
fn tolerance_boundary() {
    assert!(within_tolerance(560, 560));
    assert!(within_tolerance(420, 560));
    assert!(within_tolerance(700, 560));
    assert!(!within_tolerance(419, 560));
    assert!(!within_tolerance(701, 560));
}

#[test]
fn decoder_shared_across_threads() {
    let decoder = std::sync::Arc::new(FrameDecoder::new());
    let handles: Vec<_> = ControlCode::ALL
        .into_iter()
        .map(|code| {
            let decoder = std::sync::Arc::clone(&decoder);
            std::thread::spawn(move || {
                let capture = loopback(|s| s.send_control(code));
                decoder.decode(&capture).unwrap().as_control()
            })
        })
        .collect();

    for (handle, code) in handles.into_iter().zip(ControlCode::ALL) {
        assert_eq!(handle.join().unwrap(), Some(code));
    }
}
