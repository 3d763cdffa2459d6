//! Workspace-level integration tests for decfib live in `tests/`.
