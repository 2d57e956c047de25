//! Send a short exchange through an in-memory IR link and decode it.
//!
//! Run with: `cargo run -p irdata --example loopback`

use irdata::frame::{CaptureReader, ControlCode, FrameDecoder, FrameSender, Message, MIN_GAP};
use irdata::pulse::{PulseEmitter, PulseRecorder};

fn main() {
    let mut sender = FrameSender::new(PulseRecorder::new(MIN_GAP));
    sender.send_control(ControlCode::Start);
    sender.get_mut().space(MIN_GAP);
    sender.send_data(0b1011, 4);
    sender.get_mut().space(MIN_GAP);
    sender.send_control(ControlCode::End);

    let timeline = sender.into_inner().into_capture().into_inner();
    println!("captured {} samples", timeline.len());

    let decoder = FrameDecoder::new();
    for (index, capture) in CaptureReader::new(timeline).enumerate() {
        match decoder.decode(&capture) {
            Ok(msg) => match msg.message {
                Message::Control(code) => println!("frame {index}: control {code}"),
                Message::Data(frame) => {
                    println!("frame {index}: data 0b{frame} ({} bits)", frame.len())
                }
            },
            Err(err) => eprintln!("frame {index}: {err}"),
        }
    }
}
