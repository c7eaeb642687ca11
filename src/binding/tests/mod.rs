mod fixture;
mod tests_resolve;
mod tests_scanner;
