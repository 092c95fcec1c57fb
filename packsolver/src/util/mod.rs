/// Checks to verify the correctness of solver output
pub mod assertions;
