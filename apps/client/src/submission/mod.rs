// Submission workflow: validate the form input, send exactly one request,
// drive the view through Loading into Results or Error.
// All network traffic goes through optimize_client, never from here.

pub mod controller;
pub mod request;
pub mod validate;
