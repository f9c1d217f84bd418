mod merge_engine_tests;
mod property_tests;
