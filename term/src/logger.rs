//! Holds back the log records while the terminal surface is drawn on.
use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

/// A log target that collects the records in memory, shared between the
/// logger and the host.
#[derive(Debug, Clone, Default)]
pub(crate) struct LogBuffer {
    data: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    /// Will move everything collected so far into `out`.
    pub fn drain_into<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let data = std::mem::take(&mut *self.data.lock());
        out.write_all(&data)?;
        out.flush()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sets up the logger, with `RUST_LOG` overriding the default `warn` level.
///
/// With a buffer the records are kept back until it is drained, otherwise
/// they go straight to stderr.
pub(crate) fn init(buffer: Option<&LogBuffer>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(buffer) = buffer {
        builder.target(env_logger::Target::Pipe(Box::new(buffer.clone())));
    }
    builder.init();
}
