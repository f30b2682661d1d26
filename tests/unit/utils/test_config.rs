use bookstack_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("BSC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("BSC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("BSC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("BSC_MISSING_VAR");
    }
    let result: String = get_env_or_default("BSC_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("BSC_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("BSC_TEST_VAR_INVALID", 180);
        assert_eq!(result, 180);
        env::remove_var("BSC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("BSC_TEST_VAR_SOME", "42");
        let some: Option<u64> = get_env_or_none("BSC_TEST_VAR_SOME");
        assert_eq!(some, Some(42));
        env::remove_var("BSC_TEST_VAR_SOME");
    }
    let none: Option<u64> = get_env_or_none("BSC_TEST_VAR_NONE");
    assert_eq!(none, None);
}

#[test]
fn test_get_env_flag() {
    unsafe {
        env::set_var("BSC_TEST_FLAG_TRUE", "Yes");
        env::set_var("BSC_TEST_FLAG_FALSE", "0");
        env::set_var("BSC_TEST_FLAG_JUNK", "maybe");
        assert!(get_env_flag("BSC_TEST_FLAG_TRUE", false));
        assert!(!get_env_flag("BSC_TEST_FLAG_FALSE", true));
        assert!(get_env_flag("BSC_TEST_FLAG_JUNK", true));
        assert!(!get_env_flag("BSC_TEST_FLAG_UNSET", false));
        env::remove_var("BSC_TEST_FLAG_TRUE");
        env::remove_var("BSC_TEST_FLAG_FALSE");
        env::remove_var("BSC_TEST_FLAG_JUNK");
    }
}
