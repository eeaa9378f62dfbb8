//! Fixed-size big-endian wire codec for [`AxesEvent`] records.
//!
//! Records are exactly 25 bytes: a 4-byte magic number, a 1-byte kind, an
//! 8-byte timestamp and three 4-byte IEEE-754 floats. See spec.md §4.2.

use std::io::{self, Read, Write};

use bytes::{Buf, BufMut, BytesMut};
use tracing::warn;

use crate::event::{AxesEvent, EventKind};

/// Magic number that opens every valid record.
pub const MAGIC: u32 = 0x5628_9740;

/// Wire size of one record, in bytes.
pub const RECORD_SIZE: usize = 25;

/// Encode an event into its 25-byte wire representation.
pub fn encode(event: &AxesEvent) -> [u8; RECORD_SIZE] {
    let mut buf = BytesMut::with_capacity(RECORD_SIZE);
    buf.put_u32(MAGIC);
    buf.put_i8(event.kind as i8);
    buf.put_i64(event.timestamp);
    buf.put_f32(event.value[0] as f32);
    buf.put_f32(event.value[1] as f32);
    buf.put_f32(event.value[2] as f32);
    let mut out = [0u8; RECORD_SIZE];
    out.copy_from_slice(&buf[..]);
    out
}

/// Decode a 25-byte record into an event.
///
/// Per spec.md §4.2 step 1, a magic mismatch never raises: it yields an
/// [`EventKind::Unknown`] event (timestamp and value zeroed) and logs a
/// diagnostic via `tracing::warn!` rather than returning a `Result`.
pub fn decode(bytes: &[u8; RECORD_SIZE]) -> AxesEvent {
    let mut buf = &bytes[..];
    let magic = buf.get_u32();
    if magic != MAGIC {
        warn!(magic, expected = MAGIC, "event record magic mismatch");
        return AxesEvent::zero(EventKind::Unknown, 0);
    }
    let kind = EventKind::from_i8(buf.get_i8());
    let timestamp = buf.get_i64();
    let value = [
        buf.get_f32() as f64,
        buf.get_f32() as f64,
        buf.get_f32() as f64,
    ];
    AxesEvent::new(kind, timestamp, value)
}

/// Read and decode one record from `reader`.
///
/// Returns `Ok(None)` at a clean EOF (zero bytes read before the first
/// byte of a record); returns `Err` for any other I/O failure, including
/// a short read partway through a record.
pub fn decode_from<R: Read>(reader: &mut R) -> io::Result<Option<AxesEvent>> {
    let mut buf = [0u8; RECORD_SIZE];
    let mut filled = 0;
    loop {
        match reader.read(&mut buf[filled..])? {
            0 if filled == 0 => return Ok(None),
            0 => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "truncated event record",
                ))
            }
            n => filled += n,
        }
        if filled == RECORD_SIZE {
            return Ok(Some(decode(&buf)));
        }
    }
}

/// Encode and write one record to `writer`.
pub fn encode_to<W: Write>(writer: &mut W, event: &AxesEvent) -> io::Result<()> {
    writer.write_all(&encode(event))
}

/// Decode every record from `reader` until EOF or the first record whose
/// kind decodes as [`EventKind::Unknown`] (magic mismatch), per the
/// recording-file contract in spec.md §6.
pub fn decode_all<R: Read>(reader: &mut R) -> io::Result<Vec<AxesEvent>> {
    let mut events = Vec::new();
    while let Some(event) = decode_from(reader)? {
        if event.kind == EventKind::Unknown {
            break;
        }
        events.push(event);
    }
    Ok(events)
}
