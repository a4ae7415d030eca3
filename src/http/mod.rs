//! HTTP protocol handling.
//!
//! Only the request line is read; every connection carries exactly one
//! request and is closed by the server after the response.
//!
//! - **`connection`**: per-connection state machine
//! - **`parser`**: request line and query string parsing
//! - **`request`**: the parsed request
//! - **`response`**: status codes, response head and body sources
//! - **`writer`**: serializes a response onto the connection
//!
//! # Connection State Machine
//!
//! ```text
//!   AwaitRequestLine ── EOF / malformed ──────────────────────┐
//!          │                                                   │
//!          ▼                                                   │
//!       Parsed ─────── not in catalog ──▶ Sending (404)        │
//!          │                                  ▲                │
//!          ▼                                  │                │
//!      Validated ───── I/O failure ───────────┤ (500)          │
//!          │                                  │                │
//!          ▼                                  │                │
//!      Resolved ── template ─▶ rendered ──────┤ (200)          │
//!          └────── other ────▶ raw file ──────┘                │
//!                                             │                │
//!                                             ▼                ▼
//!                                          Closed ◀────────────┘
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
