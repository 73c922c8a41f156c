//! Edge case tests for calf-par
