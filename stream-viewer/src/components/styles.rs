pub const STREAM_VIEWER_STYLES: &str = r#"
/* Layout */
.stream-viewer {
    display: grid;
    grid-template-columns: 16rem 1fr;
    min-height: 100vh;
    font-family: ui-sans-serif, system-ui, sans-serif;
    color: var(--text-primary, #111827);
    background: var(--page-bg, #ffffff);
}

.stream-viewer-panel {
    background: var(--panel-bg, #d1d5db);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

/* Connector overlays are positioned against this element */
.stream-page {
    position: relative;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 2rem;
    overflow: auto;
}

.stream-page-empty {
    color: var(--text-secondary, #6b7280);
}

/* Stream rows */
.stream-view-label {
    display: inline-block;
    margin-bottom: 0.5rem;
    padding: 0 0.25rem;
    background: rgba(255, 255, 255, 0.75);
    font-weight: 600;
}

.stream-row {
    display: grid;
    grid-auto-flow: column;
    grid-auto-columns: max-content;
    gap: 0.5rem;
    width: max-content;
    min-height: 3.5rem;
    padding: 0.5rem;
    border: 1px solid var(--border-color, #e5e7eb);
    background: var(--row-bg, #f3f4f6);
}

.stream-row-placeholder {
    align-self: center;
    color: var(--text-secondary, #6b7280);
    font-size: 0.875rem;
}

/* Message cards */
.message-card {
    display: flex;
    flex-direction: column;
    padding: 0.5rem 1rem;
    border: 1px solid var(--border-color, #e5e7eb);
    background: var(--card-bg, #ffffff);
    cursor: default;
}

.message-card--malformed {
    border-style: dashed;
    color: var(--text-secondary, #6b7280);
}

.message-card-meta {
    display: grid;
    grid-template-columns: repeat(2, auto);
    column-gap: 0.5rem;
}

.message-card-value {
    text-align: right;
}

/* Detail popup */
.message-detail-popper {
    z-index: 10;
}

.message-detail {
    max-width: 48rem;
    padding: 1rem;
    border: 1px solid var(--border-color, #e5e7eb);
    background: var(--card-bg, #ffffff);
}

.message-detail-type {
    margin: 0 0 0.75rem 0;
    font-size: 1.25rem;
    font-weight: 700;
}

.message-detail-field {
    margin-bottom: 0.5rem;
    font-family: ui-monospace, monospace;
}

.message-detail-field span {
    margin-left: 1rem;
}

.message-detail-section h2 {
    margin: 1rem 0 0.5rem 0;
    font-size: 1.125rem;
    font-weight: 700;
}

.message-detail-table {
    font-family: ui-monospace, monospace;
    border-collapse: collapse;
}

.message-detail-table tr {
    vertical-align: top;
}

.message-detail-key {
    padding-right: 1rem;
    white-space: nowrap;
}

/* Clamp long values to two lines; the value itself is untouched */
.message-detail-value {
    max-width: 100%;
    display: -webkit-box;
    -webkit-box-orient: vertical;
    -webkit-line-clamp: 2;
    overflow: hidden;
    text-overflow: ellipsis;
    word-break: break-all;
    white-space: pre-wrap;
}

/* Causation arrows */
.causation-defs {
    position: absolute;
    width: 0;
    height: 0;
}

.causation-connector {
    position: absolute;
    left: 0;
    top: 0;
    width: 1px;
    height: 1px;
    overflow: visible;
    pointer-events: none;
    z-index: 5;
}

/* Stream name panel */
.stream-panel {
    display: flex;
    flex-direction: column;
    gap: 2rem;
    height: 100%;
    padding: 1rem 0.75rem;
}

.stream-panel-section h2 {
    margin: 0 0 0.5rem 0;
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.stream-panel-empty {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-secondary, #6b7280);
}

.stream-panel-item {
    display: flex;
    align-items: center;
    justify-content: space-between;
    width: 100%;
    margin-bottom: 0.25rem;
    padding: 0.25rem 0.5rem;
    background: var(--card-bg, #ffffff);
    border: 1px solid var(--border-color, #e5e7eb);
    font-size: 0.875rem;
    text-align: left;
    word-break: break-all;
}

.stream-panel-item--add {
    cursor: pointer;
}

.stream-panel-remove {
    border: none;
    background: transparent;
    cursor: pointer;
    font-size: 1rem;
}

.stream-panel-add {
    display: flex;
    gap: 0.25rem;
}

.stream-panel-add input {
    flex: 1;
    min-width: 0;
    padding: 0.25rem 0.5rem;
    border: 1px solid var(--border-color, #e5e7eb);
}
"#;
