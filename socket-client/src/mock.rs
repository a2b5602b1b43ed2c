//! Scripted in-memory connector for tests
//!
//! Every stream opened by a [`ScriptedConnector`] shares one script, so read
//! steps queued before a reconnect are still served after it.

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::connector::Connector;

/// What the next read on a scripted stream returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadStep {
    /// Nothing buffered (`WouldBlock`)
    Empty,
    /// Bytes available
    Data(Vec<u8>),
    /// Peer closed the connection (`Ok(0)`)
    Eof,
    /// Read fails with this error kind
    Fail(io::ErrorKind),
}

#[derive(Debug, Default)]
struct Script {
    reads: VecDeque<ReadStep>,
    written: Vec<u8>,
    connects: usize,
    read_calls: usize,
    connect_failures: VecDeque<i32>,
}

/// Connector whose streams replay a queue of read steps
///
/// Once the queue runs dry every read reports `WouldBlock`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConnector {
    script: Arc<Mutex<Script>>,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push_step(&self, step: ReadStep) {
        self.script().reads.push_back(step);
    }

    /// Queue `count` reads that find nothing buffered
    pub fn push_empty(&self, count: usize) {
        let mut script = self.script();
        for _ in 0..count {
            script.reads.push_back(ReadStep::Empty);
        }
    }

    pub fn push_data(&self, data: impl AsRef<[u8]>) {
        self.push_step(ReadStep::Data(data.as_ref().to_vec()));
    }

    pub fn push_eof(&self) {
        self.push_step(ReadStep::Eof);
    }

    /// Make the next connect attempt fail with the given OS error code
    pub fn fail_next_connect(&self, code: i32) {
        self.script().connect_failures.push_back(code);
    }

    /// Number of connect attempts, failed ones included
    pub fn connect_count(&self) -> usize {
        self.script().connects
    }

    /// Number of reads issued across all streams
    pub fn read_count(&self) -> usize {
        self.script().read_calls
    }

    /// Read steps not consumed yet
    pub fn pending_reads(&self) -> usize {
        self.script().reads.len()
    }

    pub fn written(&self) -> Vec<u8> {
        self.script().written.clone()
    }

    pub fn written_string(&self) -> String {
        String::from_utf8_lossy(&self.script().written).into_owned()
    }

    pub fn clear_written(&self) {
        self.script().written.clear();
    }
}

impl Connector for ScriptedConnector {
    type Stream = ScriptedStream;

    fn connect(&self, _host: &str, _port: u16, _timeout: Duration) -> io::Result<ScriptedStream> {
        let mut script = self.script();
        script.connects += 1;
        if let Some(code) = script.connect_failures.pop_front() {
            return Err(io::Error::from_raw_os_error(code));
        }
        Ok(ScriptedStream {
            script: Arc::clone(&self.script),
        })
    }
}

/// Stream half of [`ScriptedConnector`]
#[derive(Debug)]
pub struct ScriptedStream {
    script: Arc<Mutex<Script>>,
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
        script.read_calls += 1;

        match script.reads.pop_front() {
            None | Some(ReadStep::Empty) => Err(io::ErrorKind::WouldBlock.into()),
            Some(ReadStep::Eof) => Ok(0),
            Some(ReadStep::Fail(kind)) => Err(kind.into()),
            Some(ReadStep::Data(mut data)) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    let rest = data.split_off(n);
                    script.reads.push_front(ReadStep::Data(rest));
                }
                Ok(n)
            }
        }
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
        script.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
