//! Sample concatenated GPL sources.
//!
//! Each sample uses `\n` line endings; convert with
//! [`with_crlf`] when a test needs controller-style input.

/// Three modules with a header before the first and a trailer after the
/// last. `Gripper` carries a two-line comment run; the detached comment
/// above the blank line belongs to nothing.
pub const CELL_SOURCE: &str = "\
' Exported from controller cell 7
Global Const CELL_ID As Integer = 7

' Entry point
Module MAIN
    Public Sub MAIN()
        Gripper.Open()
    End Sub
End Module

' detached note

' Gripper control
' Author: cell team
Module Gripper
    Public Sub Open()
        Signal 1, 1
    End Sub
End Module
Module Vision
    Public Function Locate() As Boolean
        Return True
    End Function
End Module
' end of export
";

/// Module names of [`CELL_SOURCE`] in source order.
pub const CELL_MODULES: &[&str] = &["MAIN", "Gripper", "Vision"];

/// A module whose name is not an identifier.
pub const UNNAMED_SOURCE: &str = "Module 123\n    Dim x As Integer\nEnd Module\n";

/// Convert `\n` line endings to `\r\n`.
pub fn with_crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}
