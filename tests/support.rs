use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// How the test server answers each request.
#[derive(Debug, Clone, Copy)]
enum Reply {
    Status(u16),
    /// `200` headers and a partial body, then silence for the given time.
    StalledBody(Duration),
}

/// Spawn a lightweight HTTP server that answers every request with `status`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_status_server(status: u16) -> Result<(String, ServerHandle), String> {
    spawn_server(Reply::Status(status))
}

/// Spawn a server that sends `200` headers at once but holds the body back
/// for `stall`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_stalled_body_server(stall: Duration) -> Result<(String, ServerHandle), String> {
    spawn_server(Reply::StalledBody(stall))
}

fn spawn_server(reply: Reply) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream, reply));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/time", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

/// Like [`spawn_status_server`], but skips when the sandbox forbids sockets.
///
/// # Errors
///
/// Returns an error if the server fails for any other reason.
pub fn spawn_status_server_or_skip(
    status: u16,
) -> Result<Option<(String, ServerHandle)>, String> {
    match spawn_status_server(status) {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// A URL on a local port nothing listens on.
///
/// # Errors
///
/// Returns an error if a probe listener cannot be bound.
pub fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe listener failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/time", addr))
}

fn handle_client(mut stream: TcpStream, reply: Reply) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    let response = match reply {
        Reply::Status(status) => format!(
            "HTTP/1.1 {} Test\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
            status
        ),
        Reply::StalledBody(_) => {
            "HTTP/1.1 200 OK\r\nContent-Length: 10\r\nConnection: close\r\n\r\nabc".to_owned()
        }
    };
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    if let Reply::StalledBody(stall) = reply {
        thread::sleep(stall);
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `burstload` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_burstload<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = burstload_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("NO_COLOR")
        .output()
        .map_err(|err| format!("run burstload failed: {}", err))
}

fn burstload_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_burstload").map_or_else(
        || Err("CARGO_BIN_EXE_burstload missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
