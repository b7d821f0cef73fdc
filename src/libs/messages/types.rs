#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(u32, String), // id, title
    TaskUpdated(u32),
    TaskMarkedCompleted(u32),
    TaskDeleted(String), // title
    TaskNotFound(u32),
    TasksDeletedByCategory(String, usize), // category, count
    NoTasksInCategory(String),
    NoChangesDetected,
    TasksHeader,
    TasksInCategoryHeader(String),
    TasksCount(usize),
    NoTasks,

    // === SEARCH MESSAGES ===
    SearchResultsHeader(String),
    NoTasksForKeyword(String),
    NoTasksForCategory(String),
    NoTasksForStatus(String),
    SearchByKeyword,
    SearchByCategory,
    SearchByStatus,
    SelectSearchMode,

    // === PROMPTS ===
    PromptTitle,
    PromptDescription,
    PromptCategory,
    PromptDueDate,
    PromptPriority,
    PromptNewTitle,
    PromptNewDescription,
    PromptNewCategory,
    PromptNewDueDate,
    PromptNewPriority,
    PromptNewStatus,
    PromptTaskIdToEdit,
    PromptTaskIdToComplete,
    PromptTaskIdToDelete,
    PromptCategoryToList,
    PromptCategoryToDelete,
    PromptSearchQuery,
    PromptSearchCategory,
    PromptSearchStatus,
    KeepCurrentValue,
    ConfirmDeleteTask(String),
    ConfirmDeleteCategory(String, usize),
    OperationCancelled,

    // === MENU ===
    MenuHeader,
    MenuPrompt,
    MenuListAll,
    MenuListByCategory,
    MenuAdd,
    MenuEdit,
    MenuMarkCompleted,
    MenuDelete,
    MenuDeleteByCategory,
    MenuSearch,
    MenuExit,
    Goodbye,

    // === STORAGE MESSAGES ===
    StorageMissing(String),
    StorageCorrupt(String),
    StorageLocation(String),
    StorageFailed(String),

    // === VALIDATION MESSAGES ===
    ValidationFailed(String),
    FieldMustNotBeEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStorage,
    ConfigModuleView,
    SelectConfigModules,
    PromptTasksFile,
    PromptShowDescription,

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(String),
    NothingToExport,
}
