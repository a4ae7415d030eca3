use std::sync::Arc;

use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter, ReadHalf,
    WriteHalf,
};
use tracing::{debug, warn};

use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::ResponseFrame;
use crate::http::writer::ResponseWriter;
use crate::site::{ResolvedResource, Site, template};

/// Serves exactly one request on one connection, then closes it.
pub struct Connection<S> {
    reader: BufReader<ReadHalf<S>>,
    writer: BufWriter<WriteHalf<S>>,
    site: Arc<Site>,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitRequestLine,
    Parsed(Request),
    Validated(Request),
    Resolved(Request, ResolvedResource),
    Sending(ResponseFrame),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        let (read_half, write_half) = tokio::io::split(stream);
        Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
            site,
            state: ConnectionState::AwaitRequestLine,
        }
    }

    /// Drives the connection to `Closed`. The write side is shut down on
    /// every exit path, including errors.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        if let Err(e) = self.writer.shutdown().await {
            debug!(error = %e, "Shutdown after response failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitRequestLine => match self.read_request_line().await? {
                    Some(line) => match parse_request_line(&line) {
                        Ok(request) => ConnectionState::Parsed(request),
                        Err(e) => {
                            debug!(error = %e, "Dropping malformed request line");
                            ConnectionState::Closed
                        }
                    },
                    None => ConnectionState::Closed,
                },

                ConnectionState::Parsed(request) => {
                    if self.site.is_allowed(&request.path) {
                        ConnectionState::Validated(request)
                    } else {
                        warn!(path = %request.path, "Path not in catalog");
                        ConnectionState::Sending(ResponseFrame::not_found())
                    }
                }

                ConnectionState::Validated(request) => {
                    match self.site.resolve(&request.path).await {
                        Ok(resource) => ConnectionState::Resolved(request, resource),
                        Err(e) => {
                            warn!(path = %request.path, error = %e, "Failed to resolve file");
                            ConnectionState::Sending(ResponseFrame::internal_error())
                        }
                    }
                }

                ConnectionState::Resolved(request, resource) => {
                    match self.prepare(&request, resource).await {
                        Ok(frame) => ConnectionState::Sending(frame),
                        Err(e) => {
                            warn!(path = %request.path, error = %e, "Failed to read file");
                            ConnectionState::Sending(ResponseFrame::internal_error())
                        }
                    }
                }

                ConnectionState::Sending(frame) => {
                    let status = frame.head.status.as_u16();
                    let bytes = ResponseWriter::new(&mut self.writer).send(frame).await?;
                    debug!(status, bytes, "Response sent");
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads one line, without its `\n` or `\r\n` terminator.
    /// Returns `None` if the client closed before sending anything.
    async fn read_request_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        let n = self.reader.read_until(b'\n', &mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Rendered for the templated path, raw file stream otherwise.
    async fn prepare(
        &self,
        request: &Request,
        resource: ResolvedResource,
    ) -> std::io::Result<ResponseFrame> {
        if self.site.is_templated(&request.path) {
            let body = template::render(&resource.location).await?;
            Ok(ResponseFrame::ok_bytes(resource.content_type, body))
        } else {
            let file = resource.open().await?;
            Ok(ResponseFrame::ok_file(resource.content_type, file, resource.len))
        }
    }
}
