// C entry points for hosting the generator inside another UI.
// Results cross the boundary as JSON strings owned by Rust.
use crate::config::clamp_count;
use crate::core::engine::KeywordGenerator;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

fn read_str<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    unsafe { CStr::from_ptr(s) }.to_str().unwrap_or("")
}

fn into_c_string(json: String) -> *mut c_char {
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Generates suggestions and returns them as a JSON array.
/// Free the result with `keyword_finder_free_string`.
#[no_mangle]
pub extern "C" fn keyword_finder_generate(
    seed: *const c_char,
    category: *const c_char,
    count: u32,
) -> *mut c_char {
    let seed = read_str(seed);
    let category = read_str(category);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let generator = KeywordGenerator::default();
        let results = generator.generate(seed, category, clamp_count(count as usize));
        serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
    }));
    let json = result.unwrap_or_else(|_| {
        tracing::error!("Panic in keyword_finder_generate");
        "[]".to_string()
    });
    into_c_string(json)
}

#[no_mangle]
pub extern "C" fn keyword_finder_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
