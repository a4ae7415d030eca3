use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, ResponseFrame, ResponseHead};

/// Writes one response onto a connection's output sink.
///
/// The head must go out first: [`ResponseWriter::write_head`] consumes the
/// writer and hands back a [`BodyWriter`] bounded by the declared
/// Content-Length.
pub struct ResponseWriter<'a, W> {
    sink: &'a mut W,
}

impl<'a, W> ResponseWriter<'a, W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(sink: &'a mut W) -> Self {
        Self { sink }
    }

    pub async fn write_head(self, head: &ResponseHead) -> anyhow::Result<BodyWriter<'a, W>> {
        self.sink.write_all(&head.to_bytes()).await?;

        Ok(BodyWriter {
            sink: self.sink,
            remaining: head.content_length,
            written: 0,
        })
    }

    /// Writes a whole frame and flushes. Returns the number of body bytes sent.
    pub async fn send(self, frame: ResponseFrame) -> anyhow::Result<u64> {
        let ResponseFrame { head, body } = frame;
        let mut body_writer = self.write_head(&head).await?;

        match body {
            Body::Bytes(bytes) => body_writer.write_bytes(&bytes).await?,
            Body::File(file) => body_writer.copy_from(file).await?,
        }

        body_writer.finish().await
    }
}

pub struct BodyWriter<'a, W> {
    sink: &'a mut W,
    remaining: u64,
    written: u64,
}

impl<W> BodyWriter<'_, W>
where
    W: AsyncWrite + Unpin,
{
    pub async fn write_bytes(&mut self, buf: &[u8]) -> anyhow::Result<()> {
        let len = buf.len() as u64;
        if len > self.remaining {
            anyhow::bail!(
                "body exceeds Content-Length by {} bytes",
                len - self.remaining
            );
        }

        self.sink.write_all(buf).await?;
        self.remaining -= len;
        self.written += len;
        Ok(())
    }

    /// Streams from `reader` until EOF or until Content-Length is reached.
    pub async fn copy_from<R>(&mut self, reader: R) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin,
    {
        let mut limited = reader.take(self.remaining);
        let n = tokio::io::copy(&mut limited, &mut *self.sink).await?;
        self.remaining -= n;
        self.written += n;
        Ok(())
    }

    /// Flushes the sink. Fails if fewer bytes than declared were written.
    pub async fn finish(self) -> anyhow::Result<u64> {
        self.sink.flush().await?;

        if self.remaining != 0 {
            anyhow::bail!(
                "body ended {} bytes short of Content-Length",
                self.remaining
            );
        }

        Ok(self.written)
    }
}
