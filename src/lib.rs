// Library root
// -----------
// This crate exposes a small library surface for the CLI uploader. The
// binary (`main.rs`) wires the pieces together.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP interaction with the document service
//   (one multipart upload per invocation).
// - `cli`: Parses the positional argument surface and reports upload
//   outcomes on the console.
// - `error`: The failure taxonomy a single upload attempt can produce.
//
// Keeping this separation makes the upload logic testable against a stub
// server without going through the binary.
pub mod api;
pub mod cli;
pub mod error;
