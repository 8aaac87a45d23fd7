//! Core library types that doc comments commonly reference.
//!
//! Signatures use erased binary names: type variables are `java.lang.Object`
//! and varargs are arrays.

use super::SymbolTable;
use crate::model::DeclKind;
use crate::resolver::params::ParameterListParser;
use crate::resolver::TypeRef;

#[derive(Clone, Copy)]
struct Builtin {
    name: &'static str,
    kind: DeclKind,
    superclass: Option<&'static str>,
    interfaces: &'static [&'static str],
    fields: &'static [&'static str],
    methods: &'static [&'static str],
    constructors: &'static [&'static str],
}

impl Builtin {
    const fn new(name: &'static str, kind: DeclKind) -> Self {
        Self {
            name,
            kind,
            superclass: None,
            interfaces: &[],
            fields: &[],
            methods: &[],
            constructors: &[],
        }
    }

    const fn extends(self, superclass: &'static str) -> Self {
        Self {
            superclass: Some(superclass),
            ..self
        }
    }

    const fn implements(self, interfaces: &'static [&'static str]) -> Self {
        Self { interfaces, ..self }
    }

    const fn fields(self, fields: &'static [&'static str]) -> Self {
        Self { fields, ..self }
    }

    const fn methods(self, methods: &'static [&'static str]) -> Self {
        Self { methods, ..self }
    }

    const fn ctors(self, constructors: &'static [&'static str]) -> Self {
        Self {
            constructors,
            ..self
        }
    }
}

const fn class(name: &'static str) -> Builtin {
    Builtin::new(name, DeclKind::Class).ctors(&["()"])
}

const fn interface(name: &'static str) -> Builtin {
    Builtin::new(name, DeclKind::Interface)
}

const fn annotation(name: &'static str) -> Builtin {
    Builtin::new(name, DeclKind::Annotation)
}

const fn exception(name: &'static str, superclass: &'static str) -> Builtin {
    Builtin::new(name, DeclKind::Class)
        .extends(superclass)
        .ctors(THROWABLE_CTORS)
}

const THROWABLE_CTORS: &[&str] = &[
    "()",
    "(java.lang.String)",
    "(java.lang.String, java.lang.Throwable)",
    "(java.lang.Throwable)",
];

const OBJECT_METHODS: &[&str] = &[
    "equals(java.lang.Object)",
    "hashCode()",
    "toString()",
    "getClass()",
    "clone()",
    "finalize()",
    "notify()",
    "notifyAll()",
    "wait()",
    "wait(long)",
    "wait(long, int)",
];

const COLLECTION_METHODS: &[&str] = &[
    "size()",
    "isEmpty()",
    "contains(java.lang.Object)",
    "add(java.lang.Object)",
    "remove(java.lang.Object)",
    "addAll(java.util.Collection)",
    "removeAll(java.util.Collection)",
    "containsAll(java.util.Collection)",
    "clear()",
    "iterator()",
    "stream()",
    "toArray()",
    "toArray(java.lang.Object[])",
];

const BUILTINS: &[Builtin] = &[
    // java.lang
    class("java.lang.Object").methods(OBJECT_METHODS),
    class("java.lang.String")
        .implements(&[
            "java.io.Serializable",
            "java.lang.Comparable",
            "java.lang.CharSequence",
        ])
        .fields(&["CASE_INSENSITIVE_ORDER"])
        .methods(&[
            "length()",
            "isEmpty()",
            "isBlank()",
            "charAt(int)",
            "substring(int)",
            "substring(int, int)",
            "indexOf(int)",
            "indexOf(java.lang.String)",
            "lastIndexOf(java.lang.String)",
            "startsWith(java.lang.String)",
            "endsWith(java.lang.String)",
            "contains(java.lang.CharSequence)",
            "equals(java.lang.Object)",
            "equalsIgnoreCase(java.lang.String)",
            "compareTo(java.lang.String)",
            "hashCode()",
            "toString()",
            "trim()",
            "strip()",
            "split(java.lang.String)",
            "toLowerCase()",
            "toUpperCase()",
            "replace(char, char)",
            "replace(java.lang.CharSequence, java.lang.CharSequence)",
            "toCharArray()",
            "getBytes()",
            "format(java.lang.String, java.lang.Object[])",
            "join(java.lang.CharSequence, java.lang.CharSequence[])",
            "valueOf(java.lang.Object)",
            "valueOf(int)",
            "valueOf(long)",
            "valueOf(char)",
            "valueOf(boolean)",
        ])
        .ctors(&["()", "(java.lang.String)", "(char[])", "(byte[])"]),
    interface("java.lang.CharSequence").methods(&[
        "length()",
        "charAt(int)",
        "subSequence(int, int)",
        "toString()",
    ]),
    interface("java.lang.Comparable").methods(&["compareTo(java.lang.Object)"]),
    interface("java.lang.Iterable").methods(&["iterator()", "forEach(java.util.function.Consumer)"]),
    interface("java.lang.AutoCloseable").methods(&["close()"]),
    interface("java.lang.Runnable").methods(&["run()"]),
    interface("java.lang.Cloneable"),
    interface("java.lang.Appendable").methods(&[
        "append(char)",
        "append(java.lang.CharSequence)",
    ]),
    Builtin::new("java.lang.Number", DeclKind::Class)
        .extends("java.lang.Object")
        .implements(&["java.io.Serializable"])
        .methods(&["intValue()", "longValue()", "floatValue()", "doubleValue()"])
        .ctors(&["()"]),
    class("java.lang.Integer")
        .extends("java.lang.Number")
        .implements(&["java.lang.Comparable"])
        .fields(&["MAX_VALUE", "MIN_VALUE", "SIZE"])
        .methods(&[
            "parseInt(java.lang.String)",
            "valueOf(int)",
            "valueOf(java.lang.String)",
            "intValue()",
            "compareTo(java.lang.Integer)",
            "compare(int, int)",
            "toString(int)",
        ])
        .ctors(&["(int)", "(java.lang.String)"]),
    class("java.lang.Long")
        .extends("java.lang.Number")
        .implements(&["java.lang.Comparable"])
        .fields(&["MAX_VALUE", "MIN_VALUE"])
        .methods(&[
            "parseLong(java.lang.String)",
            "valueOf(long)",
            "longValue()",
            "compareTo(java.lang.Long)",
            "compare(long, long)",
        ])
        .ctors(&["(long)", "(java.lang.String)"]),
    class("java.lang.Double")
        .extends("java.lang.Number")
        .implements(&["java.lang.Comparable"])
        .fields(&["MAX_VALUE", "MIN_VALUE", "NaN", "POSITIVE_INFINITY", "NEGATIVE_INFINITY"])
        .methods(&[
            "parseDouble(java.lang.String)",
            "valueOf(double)",
            "doubleValue()",
            "isNaN()",
            "isNaN(double)",
            "compare(double, double)",
        ])
        .ctors(&["(double)", "(java.lang.String)"]),
    class("java.lang.Float")
        .extends("java.lang.Number")
        .implements(&["java.lang.Comparable"])
        .fields(&["MAX_VALUE", "MIN_VALUE", "NaN"])
        .methods(&["parseFloat(java.lang.String)", "valueOf(float)", "floatValue()"])
        .ctors(&["(float)", "(java.lang.String)"]),
    class("java.lang.Short")
        .extends("java.lang.Number")
        .implements(&["java.lang.Comparable"])
        .fields(&["MAX_VALUE", "MIN_VALUE"])
        .methods(&["parseShort(java.lang.String)", "valueOf(short)", "shortValue()"])
        .ctors(&["(short)"]),
    class("java.lang.Byte")
        .extends("java.lang.Number")
        .implements(&["java.lang.Comparable"])
        .fields(&["MAX_VALUE", "MIN_VALUE"])
        .methods(&["parseByte(java.lang.String)", "valueOf(byte)", "byteValue()"])
        .ctors(&["(byte)"]),
    class("java.lang.Boolean")
        .implements(&["java.io.Serializable", "java.lang.Comparable"])
        .fields(&["TRUE", "FALSE"])
        .methods(&[
            "parseBoolean(java.lang.String)",
            "valueOf(boolean)",
            "booleanValue()",
        ])
        .ctors(&["(boolean)"]),
    class("java.lang.Character")
        .implements(&["java.io.Serializable", "java.lang.Comparable"])
        .fields(&["MAX_VALUE", "MIN_VALUE"])
        .methods(&[
            "isDigit(char)",
            "isLetter(char)",
            "isWhitespace(char)",
            "isUpperCase(char)",
            "toUpperCase(char)",
            "toLowerCase(char)",
            "charValue()",
        ])
        .ctors(&["(char)"]),
    class("java.lang.Void"),
    class("java.lang.Math")
        .fields(&["PI", "E"])
        .methods(&[
            "abs(int)",
            "abs(long)",
            "abs(double)",
            "max(int, int)",
            "max(long, long)",
            "max(double, double)",
            "min(int, int)",
            "min(long, long)",
            "min(double, double)",
            "sqrt(double)",
            "pow(double, double)",
            "floor(double)",
            "ceil(double)",
            "round(double)",
            "random()",
        ]),
    class("java.lang.System")
        .fields(&["out", "err", "in"])
        .methods(&[
            "currentTimeMillis()",
            "nanoTime()",
            "exit(int)",
            "getProperty(java.lang.String)",
            "getenv(java.lang.String)",
            "lineSeparator()",
            "arraycopy(java.lang.Object, int, java.lang.Object, int, int)",
            "identityHashCode(java.lang.Object)",
        ]),
    class("java.lang.StringBuilder")
        .implements(&[
            "java.io.Serializable",
            "java.lang.CharSequence",
            "java.lang.Appendable",
        ])
        .methods(&[
            "append(java.lang.String)",
            "append(java.lang.Object)",
            "append(java.lang.CharSequence)",
            "append(char)",
            "append(int)",
            "append(long)",
            "append(boolean)",
            "insert(int, java.lang.String)",
            "reverse()",
            "length()",
            "setLength(int)",
            "charAt(int)",
            "toString()",
        ])
        .ctors(&["()", "(int)", "(java.lang.String)", "(java.lang.CharSequence)"]),
    Builtin::new("java.lang.Enum", DeclKind::Class)
        .extends("java.lang.Object")
        .implements(&["java.lang.Comparable", "java.io.Serializable"])
        .methods(&[
            "name()",
            "ordinal()",
            "toString()",
            "compareTo(java.lang.Enum)",
            "getDeclaringClass()",
            "valueOf(java.lang.Class, java.lang.String)",
        ]),
    Builtin::new("java.lang.Record", DeclKind::Class)
        .extends("java.lang.Object")
        .methods(&["equals(java.lang.Object)", "hashCode()", "toString()"]),
    class("java.lang.Class")
        .implements(&["java.io.Serializable"])
        .methods(&[
            "getName()",
            "getSimpleName()",
            "getSuperclass()",
            "isInstance(java.lang.Object)",
            "cast(java.lang.Object)",
            "forName(java.lang.String)",
        ]),
    class("java.lang.Thread")
        .implements(&["java.lang.Runnable"])
        .methods(&[
            "run()",
            "start()",
            "join()",
            "interrupt()",
            "isInterrupted()",
            "currentThread()",
            "sleep(long)",
            "getName()",
            "setName(java.lang.String)",
            "setDaemon(boolean)",
        ])
        .ctors(&["()", "(java.lang.Runnable)", "(java.lang.Runnable, java.lang.String)"]),
    annotation("java.lang.Override"),
    annotation("java.lang.Deprecated"),
    annotation("java.lang.FunctionalInterface"),
    annotation("java.lang.SuppressWarnings"),
    annotation("java.lang.SafeVarargs"),
    // java.lang throwables
    class("java.lang.Throwable")
        .implements(&["java.io.Serializable"])
        .methods(&[
            "getMessage()",
            "getLocalizedMessage()",
            "getCause()",
            "initCause(java.lang.Throwable)",
            "addSuppressed(java.lang.Throwable)",
            "getSuppressed()",
            "getStackTrace()",
            "fillInStackTrace()",
            "printStackTrace()",
            "toString()",
        ])
        .ctors(THROWABLE_CTORS),
    exception("java.lang.Exception", "java.lang.Throwable"),
    exception("java.lang.Error", "java.lang.Throwable"),
    exception("java.lang.RuntimeException", "java.lang.Exception"),
    exception("java.lang.IllegalArgumentException", "java.lang.RuntimeException"),
    exception("java.lang.IllegalStateException", "java.lang.RuntimeException"),
    exception("java.lang.NullPointerException", "java.lang.RuntimeException")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.IndexOutOfBoundsException", "java.lang.RuntimeException")
        .ctors(&["()", "(int)", "(java.lang.String)"]),
    exception(
        "java.lang.ArrayIndexOutOfBoundsException",
        "java.lang.IndexOutOfBoundsException",
    )
    .ctors(&["()", "(int)", "(java.lang.String)"]),
    exception(
        "java.lang.StringIndexOutOfBoundsException",
        "java.lang.IndexOutOfBoundsException",
    )
    .ctors(&["()", "(int)", "(java.lang.String)"]),
    exception("java.lang.ClassCastException", "java.lang.RuntimeException")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.ArithmeticException", "java.lang.RuntimeException")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.UnsupportedOperationException", "java.lang.RuntimeException"),
    exception("java.lang.NumberFormatException", "java.lang.IllegalArgumentException")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.SecurityException", "java.lang.RuntimeException"),
    exception("java.lang.NegativeArraySizeException", "java.lang.RuntimeException")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.CloneNotSupportedException", "java.lang.Exception")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.InterruptedException", "java.lang.Exception")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.ReflectiveOperationException", "java.lang.Exception"),
    exception(
        "java.lang.ClassNotFoundException",
        "java.lang.ReflectiveOperationException",
    )
    .ctors(&["()", "(java.lang.String)", "(java.lang.String, java.lang.Throwable)"]),
    exception("java.lang.AssertionError", "java.lang.Error")
        .ctors(&["()", "(java.lang.Object)", "(java.lang.String, java.lang.Throwable)"]),
    exception("java.lang.VirtualMachineError", "java.lang.Error"),
    exception("java.lang.OutOfMemoryError", "java.lang.VirtualMachineError")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.lang.StackOverflowError", "java.lang.VirtualMachineError")
        .ctors(&["()", "(java.lang.String)"]),
    // java.io
    interface("java.io.Serializable"),
    interface("java.io.Closeable")
        .implements(&["java.lang.AutoCloseable"])
        .methods(&["close()"]),
    interface("java.io.Flushable").methods(&["flush()"]),
    exception("java.io.IOException", "java.lang.Exception"),
    exception("java.io.FileNotFoundException", "java.io.IOException")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.io.EOFException", "java.io.IOException").ctors(&["()", "(java.lang.String)"]),
    exception("java.io.UnsupportedEncodingException", "java.io.IOException")
        .ctors(&["()", "(java.lang.String)"]),
    exception("java.io.UncheckedIOException", "java.lang.RuntimeException")
        .ctors(&["(java.lang.String, java.io.IOException)", "(java.io.IOException)"]),
    Builtin::new("java.io.InputStream", DeclKind::Class)
        .extends("java.lang.Object")
        .implements(&["java.io.Closeable"])
        .methods(&[
            "read()",
            "read(byte[])",
            "read(byte[], int, int)",
            "readAllBytes()",
            "skip(long)",
            "available()",
            "close()",
        ])
        .ctors(&["()"]),
    Builtin::new("java.io.OutputStream", DeclKind::Class)
        .extends("java.lang.Object")
        .implements(&["java.io.Closeable", "java.io.Flushable"])
        .methods(&[
            "write(int)",
            "write(byte[])",
            "write(byte[], int, int)",
            "flush()",
            "close()",
        ])
        .ctors(&["()"]),
    Builtin::new("java.io.Reader", DeclKind::Class)
        .extends("java.lang.Object")
        .implements(&["java.io.Closeable"])
        .methods(&["read()", "read(char[])", "read(char[], int, int)", "close()"]),
    Builtin::new("java.io.Writer", DeclKind::Class)
        .extends("java.lang.Object")
        .implements(&["java.lang.Appendable", "java.io.Closeable", "java.io.Flushable"])
        .methods(&[
            "write(int)",
            "write(java.lang.String)",
            "write(char[])",
            "flush()",
            "close()",
        ]),
    class("java.io.PrintStream")
        .extends("java.io.OutputStream")
        .implements(&["java.lang.Appendable"])
        .methods(&[
            "print(java.lang.String)",
            "print(java.lang.Object)",
            "println()",
            "println(java.lang.String)",
            "println(java.lang.Object)",
            "printf(java.lang.String, java.lang.Object[])",
            "format(java.lang.String, java.lang.Object[])",
        ])
        .ctors(&["(java.io.OutputStream)", "(java.io.OutputStream, boolean)"]),
    class("java.io.File")
        .implements(&["java.io.Serializable", "java.lang.Comparable"])
        .fields(&["separator", "pathSeparator"])
        .methods(&[
            "getName()",
            "getPath()",
            "getAbsolutePath()",
            "getParentFile()",
            "exists()",
            "isFile()",
            "isDirectory()",
            "length()",
            "delete()",
            "mkdirs()",
            "listFiles()",
        ])
        .ctors(&[
            "(java.lang.String)",
            "(java.lang.String, java.lang.String)",
            "(java.io.File, java.lang.String)",
        ]),
    // java.util
    interface("java.util.Collection")
        .implements(&["java.lang.Iterable"])
        .methods(COLLECTION_METHODS),
    interface("java.util.List")
        .implements(&["java.util.Collection"])
        .methods(&[
            "get(int)",
            "set(int, java.lang.Object)",
            "add(int, java.lang.Object)",
            "remove(int)",
            "indexOf(java.lang.Object)",
            "lastIndexOf(java.lang.Object)",
            "subList(int, int)",
            "sort(java.util.Comparator)",
            "listIterator()",
            "of()",
            "of(java.lang.Object[])",
            "copyOf(java.util.Collection)",
        ]),
    interface("java.util.Set")
        .implements(&["java.util.Collection"])
        .methods(&["of()", "of(java.lang.Object[])", "copyOf(java.util.Collection)"]),
    interface("java.util.SortedSet")
        .implements(&["java.util.Set"])
        .methods(&["first()", "last()", "comparator()"]),
    interface("java.util.Queue")
        .implements(&["java.util.Collection"])
        .methods(&["offer(java.lang.Object)", "poll()", "peek()", "element()"]),
    interface("java.util.Deque")
        .implements(&["java.util.Queue"])
        .methods(&[
            "push(java.lang.Object)",
            "pop()",
            "addFirst(java.lang.Object)",
            "addLast(java.lang.Object)",
            "peekFirst()",
            "peekLast()",
        ]),
    interface("java.util.Map").methods(&[
        "size()",
        "isEmpty()",
        "get(java.lang.Object)",
        "put(java.lang.Object, java.lang.Object)",
        "remove(java.lang.Object)",
        "containsKey(java.lang.Object)",
        "containsValue(java.lang.Object)",
        "getOrDefault(java.lang.Object, java.lang.Object)",
        "putIfAbsent(java.lang.Object, java.lang.Object)",
        "computeIfAbsent(java.lang.Object, java.util.function.Function)",
        "putAll(java.util.Map)",
        "keySet()",
        "values()",
        "entrySet()",
        "clear()",
        "of()",
    ]),
    interface("java.util.Map$Entry").methods(&[
        "getKey()",
        "getValue()",
        "setValue(java.lang.Object)",
    ]),
    interface("java.util.SortedMap")
        .implements(&["java.util.Map"])
        .methods(&["firstKey()", "lastKey()", "comparator()"]),
    interface("java.util.Iterator").methods(&["hasNext()", "next()", "remove()"]),
    interface("java.util.ListIterator")
        .implements(&["java.util.Iterator"])
        .methods(&["hasPrevious()", "previous()", "nextIndex()", "previousIndex()"]),
    interface("java.util.Comparator").methods(&[
        "compare(java.lang.Object, java.lang.Object)",
        "reversed()",
        "naturalOrder()",
        "reverseOrder()",
        "comparing(java.util.function.Function)",
    ]),
    interface("java.util.RandomAccess"),
    class("java.util.ArrayList")
        .implements(&[
            "java.util.List",
            "java.util.RandomAccess",
            "java.lang.Cloneable",
            "java.io.Serializable",
        ])
        .methods(&["ensureCapacity(int)", "trimToSize()"])
        .ctors(&["()", "(int)", "(java.util.Collection)"]),
    class("java.util.LinkedList")
        .implements(&[
            "java.util.List",
            "java.util.Deque",
            "java.lang.Cloneable",
            "java.io.Serializable",
        ])
        .ctors(&["()", "(java.util.Collection)"]),
    class("java.util.HashMap")
        .implements(&["java.util.Map", "java.lang.Cloneable", "java.io.Serializable"])
        .ctors(&["()", "(int)", "(int, float)", "(java.util.Map)"]),
    class("java.util.LinkedHashMap")
        .extends("java.util.HashMap")
        .implements(&["java.util.Map"])
        .ctors(&["()", "(int)", "(java.util.Map)"]),
    class("java.util.TreeMap")
        .implements(&["java.util.SortedMap", "java.lang.Cloneable", "java.io.Serializable"])
        .ctors(&["()", "(java.util.Comparator)", "(java.util.Map)"]),
    class("java.util.HashSet")
        .implements(&["java.util.Set", "java.lang.Cloneable", "java.io.Serializable"])
        .ctors(&["()", "(int)", "(java.util.Collection)"]),
    class("java.util.LinkedHashSet")
        .extends("java.util.HashSet")
        .implements(&["java.util.Set"])
        .ctors(&["()", "(int)", "(java.util.Collection)"]),
    class("java.util.TreeSet")
        .implements(&["java.util.SortedSet", "java.lang.Cloneable", "java.io.Serializable"])
        .ctors(&["()", "(java.util.Comparator)", "(java.util.Collection)"]),
    class("java.util.ArrayDeque")
        .implements(&["java.util.Deque", "java.lang.Cloneable", "java.io.Serializable"])
        .ctors(&["()", "(int)", "(java.util.Collection)"]),
    class("java.util.Optional")
        .methods(&[
            "of(java.lang.Object)",
            "ofNullable(java.lang.Object)",
            "empty()",
            "isPresent()",
            "isEmpty()",
            "get()",
            "orElse(java.lang.Object)",
            "orElseGet(java.util.function.Supplier)",
            "orElseThrow()",
            "map(java.util.function.Function)",
            "flatMap(java.util.function.Function)",
            "filter(java.util.function.Predicate)",
            "ifPresent(java.util.function.Consumer)",
        ])
        .ctors(&[]),
    class("java.util.Objects")
        .methods(&[
            "equals(java.lang.Object, java.lang.Object)",
            "hash(java.lang.Object[])",
            "hashCode(java.lang.Object)",
            "toString(java.lang.Object)",
            "isNull(java.lang.Object)",
            "nonNull(java.lang.Object)",
            "requireNonNull(java.lang.Object)",
            "requireNonNull(java.lang.Object, java.lang.String)",
        ])
        .ctors(&[]),
    class("java.util.Arrays")
        .methods(&[
            "asList(java.lang.Object[])",
            "sort(int[])",
            "sort(long[])",
            "sort(java.lang.Object[])",
            "toString(int[])",
            "toString(java.lang.Object[])",
            "equals(int[], int[])",
            "equals(java.lang.Object[], java.lang.Object[])",
            "fill(int[], int)",
            "stream(java.lang.Object[])",
        ])
        .ctors(&[]),
    class("java.util.Collections")
        .fields(&["EMPTY_LIST", "EMPTY_MAP", "EMPTY_SET"])
        .methods(&[
            "emptyList()",
            "emptyMap()",
            "emptySet()",
            "singletonList(java.lang.Object)",
            "unmodifiableList(java.util.List)",
            "unmodifiableMap(java.util.Map)",
            "unmodifiableSet(java.util.Set)",
            "sort(java.util.List)",
            "sort(java.util.List, java.util.Comparator)",
        ])
        .ctors(&[]),
    class("java.util.UUID")
        .implements(&["java.io.Serializable", "java.lang.Comparable"])
        .methods(&["randomUUID()", "fromString(java.lang.String)", "toString()"])
        .ctors(&["(long, long)"]),
    exception("java.util.NoSuchElementException", "java.lang.RuntimeException")
        .ctors(&["()", "(java.lang.String)"]),
    exception(
        "java.util.ConcurrentModificationException",
        "java.lang.RuntimeException",
    ),
    // java.util.function
    interface("java.util.function.Function")
        .methods(&["apply(java.lang.Object)", "identity()"]),
    interface("java.util.function.BiFunction")
        .methods(&["apply(java.lang.Object, java.lang.Object)"]),
    interface("java.util.function.Consumer").methods(&["accept(java.lang.Object)"]),
    interface("java.util.function.BiConsumer")
        .methods(&["accept(java.lang.Object, java.lang.Object)"]),
    interface("java.util.function.Supplier").methods(&["get()"]),
    interface("java.util.function.Predicate").methods(&["test(java.lang.Object)"]),
    // java.util.concurrent
    interface("java.util.concurrent.Callable").methods(&["call()"]),
    interface("java.util.concurrent.Future").methods(&[
        "get()",
        "get(long, java.util.concurrent.TimeUnit)",
        "cancel(boolean)",
        "isDone()",
        "isCancelled()",
    ]),
    interface("java.util.concurrent.Executor").methods(&["execute(java.lang.Runnable)"]),
    interface("java.util.concurrent.ExecutorService")
        .implements(&["java.util.concurrent.Executor", "java.lang.AutoCloseable"])
        .methods(&[
            "submit(java.util.concurrent.Callable)",
            "submit(java.lang.Runnable)",
            "shutdown()",
            "shutdownNow()",
            "awaitTermination(long, java.util.concurrent.TimeUnit)",
        ]),
    Builtin::new("java.util.concurrent.TimeUnit", DeclKind::Enum)
        .extends("java.lang.Enum")
        .fields(&[
            "NANOSECONDS",
            "MICROSECONDS",
            "MILLISECONDS",
            "SECONDS",
            "MINUTES",
            "HOURS",
            "DAYS",
        ])
        .methods(&["toMillis(long)", "toSeconds(long)", "sleep(long)"]),
    class("java.util.concurrent.ConcurrentHashMap")
        .implements(&["java.util.Map", "java.io.Serializable"])
        .ctors(&["()", "(int)", "(java.util.Map)"]),
    class("java.util.concurrent.CompletableFuture")
        .implements(&["java.util.concurrent.Future"])
        .methods(&[
            "complete(java.lang.Object)",
            "completedFuture(java.lang.Object)",
            "supplyAsync(java.util.function.Supplier)",
            "thenApply(java.util.function.Function)",
            "join()",
        ]),
    exception("java.util.concurrent.ExecutionException", "java.lang.Exception")
        .ctors(&["(java.lang.String, java.lang.Throwable)", "(java.lang.Throwable)"]),
    exception("java.util.concurrent.TimeoutException", "java.lang.Exception")
        .ctors(&["()", "(java.lang.String)"]),
    exception(
        "java.util.concurrent.CancellationException",
        "java.lang.IllegalStateException",
    )
    .ctors(&["()", "(java.lang.String)"]),
    exception(
        "java.util.concurrent.CompletionException",
        "java.lang.RuntimeException",
    )
    .ctors(&["(java.lang.String, java.lang.Throwable)", "(java.lang.Throwable)"]),
];

fn parse_params(list: &str) -> Vec<TypeRef> {
    ParameterListParser::new(list)
        .map(TypeRef::from_binary_name)
        .collect()
}

/// Load every core library type into `table`.
pub fn install(table: &mut SymbolTable) {
    for builtin in BUILTINS {
        let entry = table.declare(builtin.name, builtin.kind);
        if let Some(superclass) = builtin.superclass {
            entry.superclass = Some(TypeRef::new(superclass));
        }
        entry.interfaces = builtin.interfaces.iter().map(|i| TypeRef::new(*i)).collect();
        entry.fields = builtin.fields.iter().map(|f| f.to_string()).collect();
        for signature in builtin.methods {
            let (name, params) = signature.split_once('(').unwrap_or((*signature, ""));
            table.add_method(builtin.name, name, &parse_params(params));
        }
        for signature in builtin.constructors {
            table.add_constructor(builtin.name, &parse_params(signature));
        }
    }
}
