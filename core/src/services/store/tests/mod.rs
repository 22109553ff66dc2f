mod store_tests;
