use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, error};

type Job = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>>;

/// Fixed set of workers consuming an unbounded job queue.
///
/// Each worker runs one job at a time, so at most `size` jobs are in flight
/// and the rest wait in the queue. A job that fails or panics is logged and
/// the worker moves on to the next one.
pub struct WorkerPool {
    sender: mpsc::UnboundedSender<Job>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `size` workers on the current tokio runtime.
    pub fn new(size: usize) -> anyhow::Result<Self> {
        if size == 0 {
            anyhow::bail!("worker pool needs at least one worker");
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..size)
            .map(|id| tokio::spawn(worker_loop(id, Arc::clone(&receiver))))
            .collect();

        Ok(Self { sender, workers })
    }

    /// Queues a job without waiting for it to start.
    pub fn submit<F>(&self, job: F) -> anyhow::Result<()>
    where
        F: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.sender
            .send(Box::pin(job))
            .map_err(|_| anyhow::anyhow!("worker pool is shut down"))
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Closes the queue and waits until every queued job has run.
    pub async fn shutdown(self) {
        drop(self.sender);

        for worker in self.workers {
            if let Err(e) = worker.await {
                error!(error = %e, "Worker task failed");
            }
        }
    }
}

async fn worker_loop(id: usize, receiver: Arc<Mutex<mpsc::UnboundedReceiver<Job>>>) {
    loop {
        let job = receiver.lock().await.recv().await;
        let Some(job) = job else {
            break;
        };

        // Spawned so a panic stays inside the job.
        match tokio::spawn(job).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let chain = format!("{:#}", e);
                error!(worker = id, error = %chain, "Work unit failed");
            }
            Err(e) => error!(worker = id, error = %e, "Work unit panicked"),
        }
    }

    debug!(worker = id, "Worker stopped");
}
