mod rollup_service_tests;
