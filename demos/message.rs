//! Encode a small batch of game-state messages and decode them again.
//!
//! Run with:
//!     RUST_LOG=bytecursor=trace cargo run --example message

use bytecursor::{ByteCursor, CursorError, ListPool};
use tracing_subscriber::EnvFilter;

const PACKET_MOVE: u16 = 1;
const PACKET_CHAT: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Move { entity: u32, x: f32, y: f32 },
    Chat { from: String, text: String },
}

fn encode(cursor: &mut ByteCursor, msg: &Message) -> Result<(), CursorError> {
    match msg {
        Message::Move { entity, x, y } => {
            cursor.write_u16(PACKET_MOVE);
            cursor.write_u32(*entity);
            cursor.write_f32(*x);
            cursor.write_f32(*y);
        }
        Message::Chat { from, text } => {
            cursor.write_u16(PACKET_CHAT);
            cursor.write_s16(from)?;
            cursor.write_s16(text)?;
        }
    }
    Ok(())
}

fn decode(cursor: &mut ByteCursor) -> Result<Option<Message>, CursorError> {
    let msg = match cursor.try_peek_packet_type()? {
        PACKET_MOVE => {
            cursor.try_read_u16()?;
            Message::Move {
                entity: cursor.try_read_u32()?,
                x: cursor.try_read_f32()?,
                y: cursor.try_read_f32()?,
            }
        }
        PACKET_CHAT => {
            cursor.try_read_u16()?;
            Message::Chat {
                from: cursor.try_read_s16()?,
                text: cursor.try_read_s16()?,
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(msg))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut pool: ListPool<Message> = ListPool::new();
    let mut cursor = ByteCursor::with_capacity(8);

    for tick in 0..3u32 {
        let mut outgoing = pool.get();
        outgoing.push(Message::Move {
            entity: 7,
            x: tick as f32 * 1.5,
            y: -(tick as f32),
        });
        if tick == 1 {
            outgoing.push(Message::Chat {
                from: "alice".into(),
                text: "gg".into(),
            });
        }

        cursor.reset();
        for msg in &outgoing {
            encode(&mut cursor, msg)?;
        }
        let wire = cursor.get_buffer().to_vec();
        println!(
            "tick {tick}: {} message(s), {} bytes, buffer capacity {}",
            outgoing.len(),
            wire.len(),
            cursor.capacity()
        );

        let mut reader = ByteCursor::from(wire);
        let mut incoming = pool.get();
        while reader.remaining() > 0 {
            match decode(&mut reader)? {
                Some(msg) => incoming.push(msg),
                None => break,
            }
        }
        assert_eq!(incoming, outgoing);
        for msg in &incoming {
            println!("  {msg:?}");
        }

        pool.recycle(incoming);
        pool.recycle(outgoing);
    }

    println!("pool holds {} idle list(s)", pool.available());
    Ok(())
}
