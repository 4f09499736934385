//! Client-side listeners for the spam selection form
//!
//! The listeners are attached with `addEventListener`; rendered markup
//! carries no inline handlers.

/// Id of the header checkbox that toggles every row
pub const SELECT_ALL_ID: &str = "select-all";

/// Class shared by every row checkbox
pub const ROW_CHECKBOX_CLASS: &str = "select-node";

/// Id of the button that opens the confirmation dialog
pub const CONFIRM_BUTTON_ID: &str = "confirm-spam";

/// Id of the confirmation dialog
pub const DIALOG_ID: &str = "spam-dialog";

/// Id of the dialog's cancel button
pub const CANCEL_BUTTON_ID: &str = "cancel-spam";

/// Toggle-all: every row checkbox takes the header checkbox's state.
/// Confirm: opens the dialog. Cancel: closes it without submitting.
pub fn selection_script() -> String {
    format!(
        r#"<script>
document.addEventListener("DOMContentLoaded", function () {{
  var source = document.getElementById("{select_all}");
  if (source) {{
    source.addEventListener("change", function () {{
      var boxes = document.getElementsByClassName("{row_class}");
      for (var i = 0; i < boxes.length; i++) {{
        boxes[i].checked = source.checked;
      }}
    }});
  }}
  var dialog = document.getElementById("{dialog}");
  var open = document.getElementById("{confirm}");
  var cancel = document.getElementById("{cancel}");
  if (dialog && open) {{
    open.addEventListener("click", function () {{ dialog.showModal(); }});
  }}
  if (dialog && cancel) {{
    cancel.addEventListener("click", function () {{ dialog.close(); }});
  }}
}});
</script>"#,
        select_all = SELECT_ALL_ID,
        row_class = ROW_CHECKBOX_CLASS,
        dialog = DIALOG_ID,
        confirm = CONFIRM_BUTTON_ID,
        cancel = CANCEL_BUTTON_ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_uses_listeners() {
        let script = selection_script();
        assert!(script.contains("addEventListener(\"change\""));
        assert!(script.contains("boxes[i].checked = source.checked;"));
        assert!(script.contains("dialog.showModal()"));
        assert!(script.contains("dialog.close()"));
        assert!(!script.contains("onclick"));
    }
}
