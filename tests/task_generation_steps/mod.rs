//! Step definitions for task suggestion scenarios.
