mod show_diff_for_added_and_modified_files;
mod show_diff_for_deleted_file;
mod show_diff_with_hunks_for_modified_file;
mod show_diff_with_custom_context;
mod show_nothing_for_identical_directories;
mod show_name_status_for_changed_files;
mod show_summary_as_json;
mod reject_invalid_arguments;
