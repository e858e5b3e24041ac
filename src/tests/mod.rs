pub mod replay_tests;
pub mod scenario_tests;
pub mod snapshot_tests;
pub mod verify_tests;
