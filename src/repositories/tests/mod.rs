//! Unit tests for the repository layer

mod mock_tests;
