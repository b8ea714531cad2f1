/// Asserts that `$run` unwinds, returning the caught payload so that the test can inspect it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            #[allow(unreachable_code)]
            let _ = $run;
        }))
        .expect_err($msg);
        println!("^ panic caught");
        payload
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
