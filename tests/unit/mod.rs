mod headers_tests;
mod identity_tests;
mod session_tests;
mod storage_tests;
