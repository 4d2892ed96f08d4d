use std::io::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};

use crate::Message;

pub const DEFAULT_SOCK: &str = "cloth3d.socket";

pub struct SockServer {
	listener: UnixListener,
	stream: Option<UnixStream>,
}

impl Default for SockServer {
	fn default() -> Self {
		Self::bind(DEFAULT_SOCK)
	}
}

impl SockServer {
	pub fn bind<P: AsRef<Path>>(path: P) -> Self {
		let _ = std::fs::remove_file(path.as_ref());
		let listener = UnixListener::bind(path.as_ref()).unwrap();
		Self {
			listener,
			stream: None,
		}
	}

	fn listen(&mut self) {
		let stream = self.listener.incoming().next().unwrap().unwrap();
		self.stream = Some(stream);
	}

	pub fn send_msg(&mut self, msg: &[u8]) {
		loop {
			if let Some(stream) = self.stream.as_mut() {
				if stream.write_all(msg).is_ok() {
					return;
				}
			}
			eprintln!("Waiting");
			self.listen();
			eprintln!("Connected");
		}
	}
}

pub struct SockClient {
	path: PathBuf,
	stream: Option<UnixStream>,
	buf: Vec<u8>,
}

impl Default for SockClient {
	fn default() -> Self {
		Self::connect(DEFAULT_SOCK)
	}
}

impl SockClient {
	pub fn connect<P: AsRef<Path>>(path: P) -> Self {
		Self {
			path: path.as_ref().to_path_buf(),
			stream: None,
			buf: vec![0u8; 10_000_000],
		}
	}

	pub fn read_msg(&mut self) -> Message {
		if let Some(stream) = self.stream.as_mut() {
			match stream.read(&mut self.buf) {
				Ok(buflen) => {
					if buflen > 0 {
						return Message::from_bytes(&self.buf[..buflen]);
					}
				}
				Err(e) => {
					if e.kind() == std::io::ErrorKind::WouldBlock {
						return Message::Nop;
					}
					panic!("{:?}", e);
				}
			}
		}
		std::thread::sleep(std::time::Duration::from_millis(100));
		match UnixStream::connect(&self.path) {
			Ok(s) => {
				s.set_nonblocking(true).unwrap();
				self.stream = Some(s);
			}
			Err(e) => {
				eprintln!("{:?}", e);
				eprintln!("Waiting connection");
			}
		}
		Message::Nop
	}
}
