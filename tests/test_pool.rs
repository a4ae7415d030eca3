use gatehouse::server::WorkerPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_pool_rejects_zero_workers() {
    assert!(WorkerPool::new(0).is_err());
}

#[tokio::test]
async fn test_pool_runs_every_job() {
    let pool = WorkerPool::new(4).unwrap();
    let done = Arc::new(AtomicUsize::new(0));

    for _ in 0..50 {
        let done = Arc::clone(&done);
        pool.submit(async move {
            done.fetch_add(1, Ordering::SeqCst);
            anyhow::Ok(())
        })
        .unwrap();
    }

    pool.shutdown().await;
    assert_eq!(done.load(Ordering::SeqCst), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_pool_bounds_concurrency() {
    let pool = WorkerPool::new(3).unwrap();
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    for _ in 0..12 {
        let running = Arc::clone(&running);
        let peak = Arc::clone(&peak);
        pool.submit(async move {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            running.fetch_sub(1, Ordering::SeqCst);
            anyhow::Ok(())
        })
        .unwrap();
    }

    pool.shutdown().await;
    assert_eq!(peak.load(Ordering::SeqCst), 3);
}

async fn failing_job() -> anyhow::Result<()> {
    anyhow::bail!("boom")
}

async fn panicking_job() -> anyhow::Result<()> {
    panic!("worker job panicked on purpose")
}

#[tokio::test]
async fn test_pool_survives_failing_and_panicking_jobs() {
    let pool = WorkerPool::new(1).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    pool.submit(failing_job()).unwrap();
    pool.submit(panicking_job()).unwrap();
    pool.submit(async move {
        tx.send("still alive").unwrap();
        anyhow::Ok(())
    })
    .unwrap();

    assert_eq!(rx.recv().await, Some("still alive"));
    pool.shutdown().await;
}

#[tokio::test]
async fn test_pool_size() {
    let pool = WorkerPool::new(64).unwrap();

    assert_eq!(pool.size(), 64);
    pool.shutdown().await;
}
