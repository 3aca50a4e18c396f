/// Asserts that the provided block panics, catching the unwind so the test can carry on.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic but returned normally")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
}

pub(crate) use assert_panics;
