//! Live forwarding of child process output.
//!
//! Each pipe gets its own reader thread that copies bytes to the parent's
//! matching stream as soon as they arrive. The two readers share nothing, so
//! stdout and stderr interleave in arrival order only approximately.

use std::io::{self, Read, Write};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::warn;

const CHUNK_SIZE: usize = 8 * 1024;
const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Copy `reader` to `writer` chunk by chunk until EOF, flushing after every chunk.
///
/// Returns the number of bytes forwarded.
pub fn forward<R: Read, W: Write>(mut reader: R, mut writer: W) -> io::Result<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        writer.flush()?;
        total += n as u64;
    }

    Ok(total)
}

/// Spawn a thread forwarding `reader` to `writer`.
pub fn spawn_forwarder<R, W>(reader: R, writer: W) -> JoinHandle<io::Result<u64>>
where
    R: Read + Send + 'static,
    W: Write + Send + 'static,
{
    thread::spawn(move || forward(reader, writer))
}

/// Wait until `deadline` for a forwarder to drain its pipe.
///
/// A pipe stays open while any process holding it lives, so a grandchild left
/// behind by the agent can keep a reader blocked long after the agent exits.
/// Readers still running at the deadline are detached. Returns whether the
/// forwarder finished.
///
/// Forwarding problems never fail the run; the child's exit status decides that.
pub fn join_forwarder(
    label: &str,
    handle: JoinHandle<io::Result<u64>>,
    deadline: Instant,
) -> bool {
    while !handle.is_finished() {
        let now = Instant::now();
        if now >= deadline {
            warn!(stream = label, "output still open after agent exit, detaching reader");
            return false;
        }
        thread::sleep(JOIN_POLL_INTERVAL.min(deadline - now));
    }

    match handle.join() {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => warn!(stream = label, error = %e, "output forwarding stopped early"),
        Err(_) => warn!(stream = label, "output forwarding thread panicked"),
    }
    true
}
