use shub_metadata::MetadataStore;

pub(crate) fn list_channels(store: &MetadataStore) {
    for uid in store.channels() {
        println!("{uid}");
    }
}
